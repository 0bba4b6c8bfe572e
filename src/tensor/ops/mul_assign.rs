use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::MulAssign;

// 原地改写底层数组，不分配新张量
impl MulAssign for Tensor {
    fn mul_assign(&mut self, other: Self) {
        self.assert_same_shape(&other, Operator::MulAssign);
        self.data *= &other.data;
    }
}

impl<'a> MulAssign<&'a Self> for Tensor {
    fn mul_assign(&mut self, other: &'a Self) {
        self.assert_same_shape(other, Operator::MulAssign);
        self.data *= &other.data;
    }
}

impl MulAssign<f32> for Tensor {
    fn mul_assign(&mut self, scalar: f32) {
        self.data *= scalar;
    }
}
