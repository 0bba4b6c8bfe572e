/*
 * @Author       : 老董
 * @Date         : 2024-01-31 20:23:53
 * @LastEditors  : 老董
 * @LastEditTime : 2026-03-02
 * @Description  : 参数的存储与优化：外部计算好梯度后，由优化器对参数做原地更新
 */

mod error;
pub mod optimizer;
mod parameter;

pub use error::OptimizerError;
pub use parameter::{ParamId, ParamStore, Parameter};
