/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-03-02
 * @Description  : 优化器基础trait
 */

use crate::nn::{OptimizerError, ParamStore};

/// 优化器核心 trait
pub trait Optimizer {
    /// 参数更新（使用已计算的梯度）
    ///
    /// `PyTorch` 风格训练循环：
    /// ```ignore
    /// store.zero_grad();            // 梯度的清理由调用方负责
    /// // ……外部计算梯度，并通过 store.set_grad(id, grad) 写入……
    /// optimizer.step(&mut store)?;  // ← 只更新参数，不读写梯度以外的任何东西
    /// ```
    ///
    /// 此方法直接使用参数的 `.grad` 进行更新，`.grad` 本身不会被修改或清除。
    /// `store` 须是创建优化器时所用的那个存储，否则返回错误且不做任何修改。
    fn step(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError>;

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 设置学习率（学习率调度由调用方在两次`step`之间完成）
    fn set_learning_rate(&mut self, lr: f32);
}
