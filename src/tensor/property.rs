/*
 * @Author       : 老董
 * @Date         : 2023-10-21 03:22:26
 * @Description  : 本类仅包含一些属性方法，不包含任何运算方法，所以不会需要用到mut
 * @LastEditors  : 老董
 * @LastEditTime : 2026-03-02
 */

use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]。
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断两个张量的形状是否严格一致。如：形状为 [1, 4]，[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 按逻辑顺序（行优先）导出所有元素
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// 获取指定索引处的元素，索引越界会panic
    pub fn get(&self, index: &[usize]) -> f32 {
        match self.data.get(index) {
            Some(value) => *value,
            None => panic!(
                "{}",
                TensorError::IndexOutOfRange {
                    index: index.to_vec(),
                    shape: self.shape().to_vec(),
                }
            ),
        }
    }

    /// 是否所有元素都为零
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.)
    }
}
