use crate::error::{Result, TrialBalanceError};
use crate::llm::prompts::SYSTEM_PROMPT;
use crate::llm::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::llm::Summarizer;
use reqwest::Client;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        };

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(TrialBalanceError::NarrativeFailed(format!(
                "OpenAI API error (status {}): {}",
                status, err_text
            )));
        }

        let body: ChatCompletionResponse = res.json().await?;
        let choice = body.choices.into_iter().next().ok_or_else(|| {
            TrialBalanceError::NarrativeFailed("Empty choices list".to_string())
        })?;

        Ok(choice.message.content)
    }
}

impl Summarizer for OpenAiClient {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.chat(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .await
    }
}
