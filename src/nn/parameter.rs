/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 可训练参数及其存储。参数由调用方通过`ParamStore`持有，
 *                 优化器只记住`ParamId`，仅在`step`期间借用参数。
 */

use std::sync::atomic::{AtomicU64, Ordering};

use crate::nn::OptimizerError;
use crate::tensor::Tensor;

static NEXT_STORE_TAG: AtomicU64 = AtomicU64::new(0);

/// 参数句柄：参数加入`ParamStore`时分配的稳定整数编号，不会被复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub usize);

/// 可训练参数：当前值`data`及本轮迭代的梯度`grad`
#[derive(Debug, Clone)]
pub struct Parameter {
    name: Option<String>,
    data: Tensor,
    grad: Option<Tensor>,
}

impl Parameter {
    pub fn new(data: Tensor, name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            data,
            grad: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn data(&self) -> &Tensor {
        &self.data
    }

    pub fn set_data(&mut self, data: Tensor) {
        self.data = data;
    }

    pub fn grad(&self) -> Option<&Tensor> {
        self.grad.as_ref()
    }

    /// 设置梯度。形状在`step`时才检查
    pub fn set_grad(&mut self, grad: Tensor) {
        self.grad = Some(grad);
    }

    pub fn clear_grad(&mut self) {
        self.grad = None;
    }

    /// 同时借出（可写的）参数值与（只读的）梯度；梯度未设置时返回None
    pub(crate) fn data_and_grad_mut(&mut self) -> Option<(&mut Tensor, &Tensor)> {
        let grad = self.grad.as_ref()?;
        Some((&mut self.data, grad))
    }
}

/// 参数存储。`ParamId`即参数在其中的下标。
///
/// 每个存储（包括`clone`得到的副本）都有进程内唯一的标签，
/// 优化器据此拒绝在别的存储上执行`step`
#[derive(Debug)]
pub struct ParamStore {
    tag: u64,
    params: Vec<Parameter>,
}

impl Default for ParamStore {
    fn default() -> Self {
        Self {
            tag: NEXT_STORE_TAG.fetch_add(1, Ordering::Relaxed),
            params: Vec::new(),
        }
    }
}

impl Clone for ParamStore {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            ..Self::default()
        }
    }
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn tag(&self) -> u64 {
        self.tag
    }

    /// 加入一个参数，返回其句柄
    pub fn add(&mut self, data: Tensor, name: Option<&str>) -> ParamId {
        let id = ParamId(self.params.len());
        self.params.push(Parameter::new(data, name));
        id
    }

    pub fn get(&self, id: ParamId) -> Result<&Parameter, OptimizerError> {
        self.params
            .get(id.0)
            .ok_or(OptimizerError::ParamNotFound(id))
    }

    pub fn get_mut(&mut self, id: ParamId) -> Result<&mut Parameter, OptimizerError> {
        self.params
            .get_mut(id.0)
            .ok_or(OptimizerError::ParamNotFound(id))
    }

    pub fn set_grad(&mut self, id: ParamId, grad: Tensor) -> Result<(), OptimizerError> {
        self.get_mut(id)?.set_grad(grad);
        Ok(())
    }

    /// 清除所有参数的梯度。优化器不会调用它，由训练循环在迭代之间自行调用
    pub fn zero_grad(&mut self) {
        for param in &mut self.params {
            param.clear_grad();
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        (0..self.params.len()).map(ParamId)
    }

    /// 按`ids`的顺序同时借出多个互不重叠的参数（可写）
    pub(crate) fn disjoint_mut(
        &mut self,
        ids: &[ParamId],
    ) -> Result<Vec<&mut Parameter>, OptimizerError> {
        let mut slots: Vec<Option<&mut Parameter>> = self.params.iter_mut().map(Some).collect();
        ids.iter()
            .map(|&id| match slots.get_mut(id.0) {
                None => Err(OptimizerError::ParamNotFound(id)),
                Some(slot) => slot.take().ok_or(OptimizerError::DuplicateParam(id)),
            })
            .collect()
    }
}
