//! Static catalog of AI model options offered by the model selector.
//!
//! The catalog is curated metadata, so adding a provider only needs a new
//! entry in [`CATALOG`].

use serde::Serialize;

/// A selectable AI model option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    /// Short unique identifier, used as the selection payload.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// Explanatory text shown under the label.
    pub description: &'static str,
}

/// All model options, in display order.
pub static CATALOG: &[ModelOption] = &[
    ModelOption {
        id: "openai",
        name: "OpenAI (GPT)",
        description: "Modelos GPT de OpenAI",
    },
    ModelOption {
        id: "anthropic",
        name: "Anthropic (Claude)",
        description: "Modelos Claude de Anthropic",
    },
    ModelOption {
        id: "google",
        name: "Google (Gemini)",
        description: "Modelos Gemini de Google",
    },
    ModelOption {
        id: "deepseek",
        name: "DeepSeek",
        description: "Modelos de razonamiento avanzado",
    },
    ModelOption {
        id: "xai",
        name: "xAI (Grok)",
        description: "Modelos Grok de xAI",
    },
    ModelOption {
        id: "alibaba",
        name: "Alibaba (Qwen)",
        description: "Modelos Qwen de Alibaba",
    },
];

/// Look up a catalog entry by identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static ModelOption> {
    CATALOG.iter().find(|option| option.id == id)
}

/// Index of the entry with the given identifier.
#[must_use]
pub fn position(id: &str) -> Option<usize> {
    CATALOG.iter().position(|option| option.id == id)
}
