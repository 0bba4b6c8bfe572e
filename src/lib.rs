//! # NovoGrad
//!
//! `novograd`用纯rust实现了[NovoGrad](https://arxiv.org/abs/1905.11286)优化器：
//! 对每个参数张量（即“层”）的梯度做逐层归一化，再经二阶矩缩放、动量累积后更新参数。
//!
//! 训练循环中，梯度由外部（自动微分等）计算并写入参数的`grad`，
//! 随后调用优化器的`step`完成一次参数更新：
//! ```ignore
//! let mut store = ParamStore::new();
//! let w = store.add(Tensor::new(&[1.0, 2.0, 3.0], &[3]), Some("w"));
//! let mut optimizer = NovoGrad::new(&store, NovoGradConfig::default())?;
//!
//! store.set_grad(w, Tensor::new(&[0.1, 0.2, 0.3], &[3]))?;
//! optimizer.step(&mut store)?;
//! ```

pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;

pub use nn::optimizer::{NovoGrad, NovoGradConfig, Optimizer, OptimizerError};
pub use nn::{ParamId, ParamStore, Parameter};
pub use tensor::Tensor;
