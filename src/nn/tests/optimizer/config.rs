/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : NovoGrad 超参数配置测试
 */

use crate::assert_err;
use crate::nn::optimizer::{NovoGradConfig, OptimizerError};

#[test]
fn test_config_default() {
    let config = NovoGradConfig::default();
    assert_eq!(config.learning_rate, 0.1);
    assert_eq!(config.beta1, 0.95);
    assert_eq!(config.beta2, 0.98);
    assert_eq!(config.epsilon, 1e-8);
    assert_eq!(config.weight_decay, 0.);
    assert!(!config.gradient_averaging);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = NovoGradConfig::default()
        .with_learning_rate(0.01)
        .with_betas(0.9, 0.999)
        .with_epsilon(1e-6)
        .with_weight_decay(1e-4)
        .with_gradient_averaging(true);
    assert_eq!(config.learning_rate, 0.01);
    assert_eq!(config.beta1, 0.9);
    assert_eq!(config.beta2, 0.999);
    assert_eq!(config.epsilon, 1e-6);
    assert_eq!(config.weight_decay, 1e-4);
    assert!(config.gradient_averaging);
}

#[test]
fn test_config_from_json() {
    // 缺省字段取默认值
    let config =
        NovoGradConfig::from_json(r#"{"learningRate": 0.01, "weightDecay": 0.001}"#).unwrap();
    assert_eq!(config.learning_rate, 0.01);
    assert_eq!(config.weight_decay, 0.001);
    assert_eq!(config.beta1, 0.95);
    assert!(!config.gradient_averaging);

    let config = NovoGradConfig::from_json(r#"{"gradientAveraging": true, "beta2": 0.5}"#).unwrap();
    assert!(config.gradient_averaging);
    assert_eq!(config.beta2, 0.5);

    let config = NovoGradConfig::from_json("{}").unwrap();
    assert_eq!(config, NovoGradConfig::default());
}

#[test]
fn test_config_json_round_trip() {
    let config = NovoGradConfig::default()
        .with_learning_rate(0.25)
        .with_gradient_averaging(true);
    let json = config.to_json().unwrap();
    assert!(json.contains("\"learningRate\""));
    assert!(json.contains("\"gradientAveraging\":true"));
    assert_eq!(NovoGradConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_config_from_json_errors() {
    assert_err!(
        NovoGradConfig::from_json("not json"),
        OptimizerError::ConfigParse(_)
    );
    assert_err!(
        NovoGradConfig::from_json(r#"{"beta1": "0.9"}"#),
        OptimizerError::ConfigParse(_)
    );
    // 解析成功但取值不合法
    assert_err!(
        NovoGradConfig::from_json(r#"{"beta1": 1.5}"#),
        OptimizerError::Configuration { name: "beta1", .. }
    );
}

#[test]
fn test_config_validate() {
    let cases = [
        (NovoGradConfig::default().with_betas(0., 0.98), "beta1"),
        (NovoGradConfig::default().with_betas(1., 0.98), "beta1"),
        (NovoGradConfig::default().with_betas(1.5, 0.98), "beta1"),
        (NovoGradConfig::default().with_betas(0.9, 0.), "beta2"),
        (NovoGradConfig::default().with_betas(0.9, 1.), "beta2"),
        (NovoGradConfig::default().with_betas(f32::NAN, 0.98), "beta1"),
        (NovoGradConfig::default().with_epsilon(0.), "epsilon"),
        (NovoGradConfig::default().with_epsilon(-1e-8), "epsilon"),
        (NovoGradConfig::default().with_epsilon(f32::INFINITY), "epsilon"),
        (NovoGradConfig::default().with_learning_rate(-0.1), "learningRate"),
        (NovoGradConfig::default().with_learning_rate(f32::NAN), "learningRate"),
        (NovoGradConfig::default().with_weight_decay(-1.), "weightDecay"),
        (NovoGradConfig::default().with_weight_decay(f32::NAN), "weightDecay"),
    ];
    for (config, expected_name) in cases {
        assert_err!(
            config.validate(),
            OptimizerError::Configuration { name, .. } if *name == expected_name
        );
    }

    // 边界上的合法值
    assert!(NovoGradConfig::default().with_learning_rate(0.).validate().is_ok());
    assert!(NovoGradConfig::default().with_weight_decay(0.).validate().is_ok());
}

#[test]
fn test_config_error_message() {
    let err = NovoGradConfig::default().with_betas(1.5, 0.98).validate().unwrap_err();
    assert_eq!(err.to_string(), "配置项`beta1`的值1.5不合法：须满足0 < beta1 < 1");
}
