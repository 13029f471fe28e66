use crate::voice::Voice;

/// Body of `POST /v1/realtime/sessions`.
///
/// Built fresh for every proxied request. The upstream's reply is not modelled
/// here; callers pass it through as raw JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionRequest {
    /// The realtime model to open a session against.
    /// ex: "gpt-4o-realtime-preview-2024-12-17"
    model: String,

    /// The voice the model uses to respond.
    voice: Voice,

    /// The default system instructions prepended to model calls.
    instructions: String,
}

impl SessionRequest {
    pub fn builder(model: &str) -> SessionConfigurator {
        SessionConfigurator::new(model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

pub struct SessionConfigurator {
    session: SessionRequest,
}

impl SessionConfigurator {
    pub fn new(model: &str) -> Self {
        Self {
            session: SessionRequest {
                model: model.to_string(),
                voice: Voice::Alloy,
                instructions: String::new(),
            },
        }
    }

    pub fn with_voice(mut self, voice: Voice) -> Self {
        self.session.voice = voice;
        self
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.session.instructions = instructions.to_string();
        self
    }

    pub fn build(self) -> SessionRequest {
        self.session
    }
}
