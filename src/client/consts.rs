use realtime_session_types::Voice;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

pub const BASE_URL: &str = "https://api.openai.com/v1";
pub const SESSIONS_PATH: &str = "/realtime/sessions";

pub const DEFAULT_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";
pub const DEFAULT_VOICE: Voice = Voice::Verse;
pub const DEFAULT_INSTRUCTIONS: &str = "You are a helpful AI assistant. You can engage in voice conversations and help with various tasks.
When using the getLatestArxivPapers function:
1. Always inform the user before making the call
2. Summarize the findings in a clear, concise way
3. Focus on the most relevant papers
4. Provide brief insights about each paper";
