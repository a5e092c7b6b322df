//! The three classifiers the prediction server knows about.
//!
//! The catalog is compiled in and never fetched. `ModelId` is a closed enum, so
//! a lookup can't miss.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    Model1,
    Model2,
    Model3,
}

impl ModelId {
    /// Wire value sent as the `modelId` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Model1 => "model1",
            ModelId::Model2 => "model2",
            ModelId::Model3 => "model3",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub id: ModelId,
    pub name: &'static str,
    pub description: &'static str,
}

pub const MODELS: [ModelDescriptor; 3] = [
    ModelDescriptor {
        id: ModelId::Model1,
        name: "Model 1 – ResNet18 (DA only)",
        description: "Fine-tuned ResNet18 trained using data augmentation only.",
    },
    ModelDescriptor {
        id: ModelId::Model2,
        name: "Model 2 – ResNet18 (DA + class weights)",
        description: "ResNet18 trained with class-weighted loss to address dataset imbalance.",
    },
    ModelDescriptor {
        id: ModelId::Model3,
        name: "Model 3 – MobileNetV3 (friend’s model)",
        description: "MobileNetV3 model trained by teammate and exported as ONNX.",
    },
];

pub fn all() -> &'static [ModelDescriptor] {
    &MODELS
}

pub fn default_model() -> &'static ModelDescriptor {
    &MODELS[0]
}

pub fn find(id: ModelId) -> &'static ModelDescriptor {
    match id {
        ModelId::Model1 => &MODELS[0],
        ModelId::Model2 => &MODELS[1],
        ModelId::Model3 => &MODELS[2],
    }
}
