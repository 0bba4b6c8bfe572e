use crate::tensor::Tensor;
use std::cmp::PartialEq;

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 平方欧氏范数（对矩阵而言即Frobenius范数的平方）：所有元素平方后求和，返回纯数。
    /// 按元素的逻辑顺序依次累加，保证同样的输入得到逐位相同的结果
    pub fn squared_norm(&self) -> f32 {
        self.data.iter().fold(0.0, |acc, &x| acc + x * x)
    }
}
