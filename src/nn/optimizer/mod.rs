/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-03-02
 * @Description  : 优化器模块，实现 NovoGrad 梯度优化算法
 */

mod base;
mod config;
mod novograd;

pub use crate::nn::OptimizerError;
pub use base::Optimizer;
pub use config::NovoGradConfig;
pub use novograd::{NovoGrad, ParamState, Phase};
