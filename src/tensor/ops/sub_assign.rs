use crate::errors::Operator;
use crate::tensor::Tensor;
use std::ops::SubAssign;

// 原地改写底层数组，不分配新张量
impl SubAssign for Tensor {
    fn sub_assign(&mut self, other: Self) {
        self.assert_same_shape(&other, Operator::SubAssign);
        self.data -= &other.data;
    }
}

impl<'a> SubAssign<&'a Self> for Tensor {
    fn sub_assign(&mut self, other: &'a Self) {
        self.assert_same_shape(other, Operator::SubAssign);
        self.data -= &other.data;
    }
}

impl SubAssign<f32> for Tensor {
    fn sub_assign(&mut self, scalar: f32) {
        self.data -= scalar;
    }
}
