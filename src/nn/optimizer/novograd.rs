/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : NovoGrad优化器实现
 *
 * NovoGrad 与 Adam 的区别在于二阶矩是“逐层”的标量：每个参数张量只维护一个
 * 梯度平方范数的指数滑动平均，而不是逐元素的二阶矩。单个参数的更新为：
 *   g2   = ‖g‖²
 *   ema  = β2 * ema + (1 - β2) * g2                （首次更新时 ema = g2）
 *   n    = g / (√ema + ε)                          （开启梯度平均时再乘以 1 - β1）
 *   v    = β2 * v + (1 - β2) * ‖n‖²
 *   m    = β1 * m + n / (√v + ε) + wd * θ
 *   θ    = θ - lr * √(1 - β2^t) / (1 - β1^t) * m
 *
 * v、m 在首次调用`step`时按当前梯度预先初始化（v = ‖g‖²，m = g / (‖g‖ + ε) + wd * θ），
 * 随后同一次调用中紧接着执行第一次更新。
 */

use std::collections::HashSet;

use log::{debug, trace, warn};
use rayon::prelude::*;

use super::base::Optimizer;
use super::config::{NovoGradConfig, check_learning_rate};
use crate::nn::{OptimizerError, ParamId, ParamStore};
use crate::tensor::Tensor;

/// 优化器的全局阶段：首次`step`时所有参数一次性从`Uninitialized`转为`Active`，不可逆
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Active,
}

/// 单个参数的优化器状态
#[derive(Debug, Clone, PartialEq)]
pub struct ParamState {
    /// 已执行的更新次数
    step_count: u64,
    /// 二阶矩 v：归一化梯度平方范数的滑动平均
    second_moment: f32,
    /// 一阶矩 m（动量），形状同参数
    first_moment: Tensor,
    /// 原始梯度平方范数的滑动平均，首次更新前为None
    gradient_ema: Option<f32>,
}

impl ParamState {
    pub const fn step_count(&self) -> u64 {
        self.step_count
    }

    pub const fn second_moment(&self) -> f32 {
        self.second_moment
    }

    pub const fn first_moment(&self) -> &Tensor {
        &self.first_moment
    }

    pub const fn gradient_ema(&self) -> Option<f32> {
        self.gradient_ema
    }
}

/// 一次`step`中单个参数的借用：可写的参数值和只读的梯度，`step`返回即归还
struct UpdateSlot<'s> {
    id: ParamId,
    data: &'s mut Tensor,
    grad: &'s Tensor,
}

/// NovoGrad 优化器
///
/// # 使用示例
/// ```ignore
/// let mut store = ParamStore::new();
/// let w = store.add(Tensor::new(&[1.0, 2.0, 3.0], &[3]), Some("w"));
/// let mut optimizer = NovoGrad::new(&store, NovoGradConfig::default())?;
///
/// store.set_grad(w, Tensor::new(&[0.1, 0.2, 0.3], &[3]))?;
/// optimizer.step(&mut store)?;
/// ```
#[derive(Debug)]
pub struct NovoGrad {
    config: NovoGradConfig,
    /// 创建时所用`ParamStore`的标签
    store_tag: u64,
    /// 要优化的参数；下标即状态槽位
    params: Vec<ParamId>,
    phase: Phase,
    /// 与`params`一一对应，首次`step`前为空
    states: Vec<ParamState>,
}

impl NovoGrad {
    /// 创建新的 NovoGrad 优化器（优化存储中的所有参数）
    pub fn new(store: &ParamStore, config: NovoGradConfig) -> Result<Self, OptimizerError> {
        let params: Vec<ParamId> = store.ids().collect();
        Self::with_params(store, &params, config)
    }

    /// 使用指定参数创建 NovoGrad 优化器
    ///
    /// 用于需要分别优化不同参数组的场景，如：
    /// - GAN 训练（G 和 D 用不同优化器）
    /// - 迁移学习（冻结部分层）
    /// - 分层学习率
    pub fn with_params(
        store: &ParamStore,
        params: &[ParamId],
        config: NovoGradConfig,
    ) -> Result<Self, OptimizerError> {
        config.validate()?;

        let mut seen = HashSet::with_capacity(params.len());
        for &id in params {
            store.get(id)?;
            if !seen.insert(id) {
                return Err(OptimizerError::DuplicateParam(id));
            }
        }

        debug!("创建NovoGrad优化器：{}个参数，配置{config:?}", params.len());
        Ok(Self {
            config,
            store_tag: store.tag(),
            params: params.to_vec(),
            phase: Phase::Uninitialized,
            states: Vec::new(),
        })
    }

    pub const fn config(&self) -> &NovoGradConfig {
        &self.config
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// 获取优化器绑定的参数列表
    pub fn params(&self) -> &[ParamId] {
        &self.params
    }

    /// 获取指定参数的优化器状态；首次`step`前或参数不归本优化器管理时返回None
    pub fn state(&self, id: ParamId) -> Option<&ParamState> {
        let slot = self.params.iter().position(|&p| p == id)?;
        self.states.get(slot)
    }

    /// 已执行过`step_count`次更新的参数，其下一次更新所用的（偏差修正后的）步长
    pub fn step_size(&self, step_count: u64) -> f32 {
        bias_corrected_step_size(&self.config, step_count)
    }

    /// 设置学习率，负数或非有限值会被拒绝且保持原学习率不变
    pub fn try_set_learning_rate(&mut self, lr: f32) -> Result<(), OptimizerError> {
        check_learning_rate(lr)?;
        self.config.learning_rate = lr;
        Ok(())
    }

    /// 与`step`相同，但各参数的更新在rayon线程池中并行执行。
    /// 校验与首次初始化仍在并行之前完成，每个线程只接触自己的参数与状态
    pub fn step_par(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError> {
        let mut slots = self.prepare(store)?;
        let config = &self.config;
        self.states
            .par_iter_mut()
            .zip(slots.par_iter_mut())
            .for_each(|(state, slot)| update_param(config, state, slot));
        Ok(())
    }
}

impl Optimizer for NovoGrad {
    fn step(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError> {
        let mut slots = self.prepare(store)?;
        for (state, slot) in self.states.iter_mut().zip(slots.iter_mut()) {
            update_param(&self.config, state, slot);
        }
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.config.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f32) {
        if let Err(e) = self.try_set_learning_rate(lr) {
            warn!("忽略学习率设置：{e}");
        }
    }
}

impl NovoGrad {
    /// 借出并校验所有参数；若是首次调用，再为所有参数初始化状态。
    /// 任何错误都发生在写入参数或状态之前
    fn prepare<'s>(
        &mut self,
        store: &'s mut ParamStore,
    ) -> Result<Vec<UpdateSlot<'s>>, OptimizerError> {
        if store.tag() != self.store_tag {
            return Err(OptimizerError::StoreMismatch);
        }
        let params = store.disjoint_mut(&self.params)?;
        let mut slots = Vec::with_capacity(params.len());
        for (index, (&id, param)) in self.params.iter().zip(params).enumerate() {
            let (data, grad) = param
                .data_and_grad_mut()
                .ok_or(OptimizerError::MissingGradient(id))?;
            if !grad.is_same_shape(data) {
                return Err(OptimizerError::ShapeMismatch {
                    id,
                    expected: data.shape().to_vec(),
                    got: grad.shape().to_vec(),
                });
            }
            // 状态一经创建便不再重建，参数值被换成别的形状后无法继续更新
            if let Some(state) = self.states.get(index) {
                if !state.first_moment.is_same_shape(data) {
                    return Err(OptimizerError::ShapeMismatch {
                        id,
                        expected: state.first_moment.shape().to_vec(),
                        got: data.shape().to_vec(),
                    });
                }
            }
            slots.push(UpdateSlot { id, data, grad });
        }

        if self.phase == Phase::Uninitialized {
            self.states = slots
                .iter()
                .map(|slot| init_state(&self.config, &*slot.data, slot.grad))
                .collect();
            self.phase = Phase::Active;
            debug!("NovoGrad状态初始化完成：{}个参数", self.states.len());
        }
        Ok(slots)
    }
}

/// 偏差修正后的步长：lr * √(1 - β2^t) / (1 - β1^t)，其中 t = step_count + 1
fn bias_corrected_step_size(config: &NovoGradConfig, step_count: u64) -> f32 {
    let t = i32::try_from(step_count.saturating_add(1)).unwrap_or(i32::MAX);
    let bias_correction1 = 1.0 - config.beta1.powi(t);
    let bias_correction2 = 1.0 - config.beta2.powi(t);
    config.learning_rate * bias_correction2.sqrt() / bias_correction1
}

/// 首次`step`时的状态初始化：v = ‖g‖²，m = g / (‖g‖ + ε) + wd * θ
fn init_state(config: &NovoGradConfig, data: &Tensor, grad: &Tensor) -> ParamState {
    let second_moment = grad.squared_norm();
    let mut first_moment = grad / (second_moment.sqrt() + config.epsilon);
    if config.weight_decay != 0.0 {
        first_moment += &(config.weight_decay * data);
    }
    ParamState {
        step_count: 0,
        second_moment,
        first_moment,
        gradient_ema: None,
    }
}

/// 单个参数的一次 NovoGrad 更新，只读写该参数自己的值与状态
fn update_param(
    config: &NovoGradConfig,
    state: &mut ParamState,
    slot: &mut UpdateSlot<'_>,
) {
    let NovoGradConfig {
        beta1,
        beta2,
        epsilon,
        weight_decay,
        gradient_averaging,
        ..
    } = *config;

    let grad_norm_sq = slot.grad.squared_norm();
    if grad_norm_sq == 0.0 {
        debug!("参数{:?}的梯度全为零，本次仅衰减动量", slot.id);
    }
    let gradient_ema = match state.gradient_ema {
        Some(ema) => beta2 * ema + (1.0 - beta2) * grad_norm_sq,
        None => grad_norm_sq,
    };

    let mut normalized_grad = slot.grad / (gradient_ema.sqrt() + epsilon);
    if gradient_averaging {
        normalized_grad *= 1.0 - beta1;
    }

    let second_moment =
        beta2 * state.second_moment + (1.0 - beta2) * normalized_grad.squared_norm();

    state.first_moment *= beta1;
    state.first_moment += &(&normalized_grad / (second_moment.sqrt() + epsilon));
    if weight_decay != 0.0 {
        state.first_moment += &(weight_decay * &*slot.data);
    }

    let step_size = bias_corrected_step_size(config, state.step_count);
    *slot.data -= &(step_size * &state.first_moment);

    state.step_count += 1;
    state.second_moment = second_moment;
    state.gradient_ema = Some(gradient_ema);

    trace!(
        "参数{:?}第{}次更新：‖g‖²={grad_norm_sq}，ema={gradient_ema}，v={second_moment}，步长={step_size}",
        slot.id, state.step_count
    );
}
