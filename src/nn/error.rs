/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 参数存储与优化器的错误类型
 */

use thiserror::Error;

use crate::nn::ParamId;

/// 优化器（及其所操作的参数存储）的错误类型。
/// 所有错误都在修改任何参数之前同步检出，`step`要么更新全部参数，要么一个都不改
#[derive(Error, Debug, PartialEq)]
pub enum OptimizerError {
    /// 超参数不合法（构造时、解析配置时或修改学习率时检出）
    #[error("配置项`{name}`的值{value}不合法：须满足{constraint}")]
    Configuration {
        name: &'static str,
        value: f32,
        constraint: &'static str,
    },
    /// 配置文本无法解析
    #[error("配置解析失败：{0}")]
    ConfigParse(String),
    /// 梯度与参数值的形状不一致，或参数值的形状与优化器状态记录的形状不一致
    #[error("参数{id:?}的形状不一致：预期{expected:?}，实际为{got:?}")]
    ShapeMismatch {
        id: ParamId,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    /// 调用`step`时参数尚未设置梯度
    #[error("参数{0:?}没有梯度")]
    MissingGradient(ParamId),
    #[error("参数{0:?}不存在")]
    ParamNotFound(ParamId),
    #[error("参数{0:?}被重复指定")]
    DuplicateParam(ParamId),
    /// `step`收到的参数存储不是创建优化器时所用的那个
    #[error("参数存储与创建优化器时所用的存储不同")]
    StoreMismatch,
}
