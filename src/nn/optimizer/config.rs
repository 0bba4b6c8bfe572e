/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : NovoGrad 的超参数配置：默认值、链式设置、JSON（反）序列化及合法性校验
 */

use serde::{Deserialize, Serialize};

use crate::nn::OptimizerError;

/// NovoGrad 超参数
///
/// 序列化时字段名为驼峰式（`learningRate`、`beta1`、`beta2`、`epsilon`、
/// `weightDecay`、`gradientAveraging`），缺省字段取默认值：
/// ```ignore
/// let config = NovoGradConfig::from_json(r#"{"learningRate": 0.01, "weightDecay": 1e-3}"#)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NovoGradConfig {
    /// 学习率
    pub learning_rate: f32,
    /// β1（动量衰减）
    pub beta1: f32,
    /// β2（二阶矩及梯度EMA的衰减）
    pub beta2: f32,
    /// 数值稳定项，须严格为正
    pub epsilon: f32,
    /// 权重衰减系数，直接加入动量累积
    pub weight_decay: f32,
    /// 是否在累积动量前将归一化梯度乘以(1 - β1)
    pub gradient_averaging: bool,
}

impl Default for NovoGradConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            beta1: 0.95,
            beta2: 0.98,
            epsilon: 1e-8,
            weight_decay: 0.0,
            gradient_averaging: false,
        }
    }
}

impl NovoGradConfig {
    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn with_betas(mut self, beta1: f32, beta2: f32) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn with_gradient_averaging(mut self, enabled: bool) -> Self {
        self.gradient_averaging = enabled;
        self
    }

    /// 从JSON文本解析配置并校验
    pub fn from_json(json: &str) -> Result<Self, OptimizerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| OptimizerError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, OptimizerError> {
        serde_json::to_string(self).map_err(|e| OptimizerError::ConfigParse(e.to_string()))
    }

    /// 校验各超参数：
    /// - β1、β2 ∈ (0, 1)
    /// - ε > 0
    /// - 学习率 ≥ 0
    /// - 权重衰减 ≥ 0
    ///
    /// 非有限值（NaN、±∞）一律视为不合法
    pub fn validate(&self) -> Result<(), OptimizerError> {
        check_learning_rate(self.learning_rate)?;
        check(
            "beta1",
            self.beta1,
            self.beta1 > 0.0 && self.beta1 < 1.0,
            "0 < beta1 < 1",
        )?;
        check(
            "beta2",
            self.beta2,
            self.beta2 > 0.0 && self.beta2 < 1.0,
            "0 < beta2 < 1",
        )?;
        check(
            "epsilon",
            self.epsilon,
            self.epsilon > 0.0 && self.epsilon.is_finite(),
            "epsilon > 0",
        )?;
        check(
            "weightDecay",
            self.weight_decay,
            self.weight_decay >= 0.0 && self.weight_decay.is_finite(),
            "weightDecay ≥ 0",
        )
    }
}

pub(super) fn check_learning_rate(lr: f32) -> Result<(), OptimizerError> {
    check(
        "learningRate",
        lr,
        lr >= 0.0 && lr.is_finite(),
        "learningRate ≥ 0",
    )
}

// NaN 与任何数比较都为false，故上面的区间判断已把NaN排除在外
fn check(
    name: &'static str,
    value: f32,
    ok: bool,
    constraint: &'static str,
) -> Result<(), OptimizerError> {
    if ok {
        Ok(())
    } else {
        Err(OptimizerError::Configuration {
            name,
            value,
            constraint,
        })
    }
}
