use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::AddAssign;

// 原地改写底层数组，不分配新张量
impl AddAssign for Tensor {
    fn add_assign(&mut self, other: Self) {
        self.assert_same_shape(&other, Operator::AddAssign);
        self.data += &other.data;
    }
}

impl<'a> AddAssign<&'a Self> for Tensor {
    fn add_assign(&mut self, other: &'a Self) {
        self.assert_same_shape(other, Operator::AddAssign);
        self.data += &other.data;
    }
}

impl AddAssign<f32> for Tensor {
    fn add_assign(&mut self, scalar: f32) {
        self.data += scalar;
    }
}
