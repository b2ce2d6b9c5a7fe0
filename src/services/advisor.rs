// src/services/advisor.rs
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::error::AdvisorError;
use crate::services::weather::{Conditions, WeatherClient};

pub const SYSTEM_PROMPT: &str = "You are a concise plant care coach.";

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

// Assumed readings when no weather is available.
const DEFAULT_TEMP_C: f64 = 25.0;
const DEFAULT_HUMIDITY_PCT: f64 = 60.0;

/// An interface for sending a system/user prompt pair to a language model
/// and getting the reply text back. Keeps the advisor decoupled from any
/// particular provider.
#[async_trait]
pub trait AdviceModel: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AdvisorError>;
}

/// OpenAI chat-completions implementation of [`AdviceModel`].
pub struct OpenAiModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiModel {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl AdviceModel for OpenAiModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AdvisorError> {
        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": system},
                    {"role": "user", "content": user},
                ],
                "max_tokens": 120,
                "temperature": 0.6,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body: CompletionBody = response.json().await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(AdvisorError::EmptyCompletion);
        }
        Ok(text.to_string())
    }
}

#[derive(Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: String,
}

/// Produces the reply for one chat question: AI model first, locally
/// generated tips whenever the model is missing or fails. Never errors.
pub struct Advisor {
    model: Option<Box<dyn AdviceModel>>,
    weather: Option<WeatherClient>,
}

impl Advisor {
    pub fn new(model: Option<Box<dyn AdviceModel>>, weather: Option<WeatherClient>) -> Self {
        Self { model, weather }
    }

    /// Features degrade per missing key: no AI key means local tips only,
    /// no weather key means the default readings.
    pub fn from_config(config: &Config) -> Self {
        let model = config
            .openai_api_key
            .as_ref()
            .map(|key| Box::new(OpenAiModel::new(key, &config.chat_model)) as Box<dyn AdviceModel>);
        let weather = config
            .openweather_api_key
            .as_ref()
            .map(WeatherClient::new);
        Self::new(model, weather)
    }

    pub async fn advise(&self, city: &str, question: &str) -> String {
        let conditions = self.lookup_weather(city).await;

        if let Some(model) = &self.model {
            match model.complete(SYSTEM_PROMPT, &chat_prompt(city, question, conditions)).await {
                Ok(reply) => return reply,
                Err(err) => warn!(error = %err, "advice model unavailable, using local tips"),
            }
        }

        let (temp_c, humidity_pct) = conditions
            .map(|c| (c.temp_c, c.humidity_pct))
            .unwrap_or((DEFAULT_TEMP_C, DEFAULT_HUMIDITY_PCT));
        local_tips("generic", temp_c, humidity_pct)
    }

    async fn lookup_weather(&self, city: &str) -> Option<Conditions> {
        let client = self.weather.as_ref()?;
        match client.current(city).await {
            Ok(conditions) => Some(conditions),
            Err(err) => {
                warn!(error = %err, city, "weather lookup failed");
                None
            }
        }
    }
}

/// User prompt for one chat question, with current readings when known.
pub fn chat_prompt(city: &str, question: &str, conditions: Option<Conditions>) -> String {
    let readings = conditions
        .map(|c| format!("Temp: {:.0}°C. Humidity: {:.0}%. ", c.temp_c, c.humidity_pct))
        .unwrap_or_default();
    format!(
        "City: {city}. Question: {question}. {readings}\
         Respond with ONE actionable, specific tip (max 35 words). \
         If heat risk, mention shade/evaporation. If cold risk, mention insulation. \
         Tone: friendly, direct. No disclaimers."
    )
}

/// Deterministic care tips from temperature, soil humidity, and species
/// keywords. Always produces something sensible.
pub fn local_tips(species: &str, temp_c: f64, humidity_pct: f64) -> String {
    let mut tips = Vec::new();

    if temp_c >= 32.0 {
        tips.push("Hace mucho calor: sombra parcial y riego temprano o al atardecer.");
    } else if temp_c <= 10.0 {
        tips.push("Frío: resguarda del viento, reduce riegos y busca microclima más cálido.");
    } else {
        tips.push("Temperatura moderada: mantén riego regular y buena luz indirecta.");
    }

    if humidity_pct < 30.0 {
        tips.push("El sustrato está muy seco: riega hoy y revisa drenaje.");
    } else if humidity_pct < 60.0 {
        tips.push("Riega pronto; el sustrato se está secando.");
    } else {
        tips.push("Humedad correcta: evita encharcar.");
    }

    let species = species.to_lowercase();
    if species.contains("cactus") || species.contains("succulent") || species.contains("suculenta")
    {
        tips.push("Para suculentas/cactus: riego profundo pero espaciado; mucha luz.");
    } else if species.contains("orchid") || species.contains("orquídea") {
        tips.push("Orquídea: riego ligero, buena aireación y luz filtrada.");
    } else if species.contains("fern") || species.contains("helecho") {
        tips.push("Helecho: mantén sustrato húmedo y alta humedad ambiental.");
    } else {
        tips.push("Revisa hojas: amarillas suele ser exceso de agua; secas, falta de agua/luz.");
    }

    tips.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedModel(Result<&'static str, ()>);

    #[async_trait]
    impl AdviceModel for CannedModel {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, AdvisorError> {
            match self.0 {
                Ok(reply) => Ok(reply.to_string()),
                Err(()) => Err(AdvisorError::EmptyCompletion),
            }
        }
    }

    #[test]
    fn tips_follow_temperature_bands() {
        assert!(local_tips("generic", 35.0, 60.0).contains("Hace mucho calor"));
        assert!(local_tips("generic", 5.0, 60.0).contains("Frío"));
        assert!(local_tips("generic", 25.0, 60.0).contains("Temperatura moderada"));
    }

    #[test]
    fn tips_follow_humidity_bands() {
        assert!(local_tips("generic", 25.0, 20.0).contains("muy seco"));
        assert!(local_tips("generic", 25.0, 45.0).contains("Riega pronto"));
        assert!(local_tips("generic", 25.0, 80.0).contains("Humedad correcta"));
    }

    #[test]
    fn tips_recognize_species_keywords() {
        assert!(local_tips("Cactus de jardín", 25.0, 60.0).contains("suculentas/cactus"));
        assert!(local_tips("orchid", 25.0, 60.0).contains("Orquídea"));
        assert!(local_tips("helecho", 25.0, 60.0).contains("sustrato húmedo"));
        assert!(local_tips("generic", 25.0, 60.0).contains("Revisa hojas"));
    }

    #[test]
    fn prompt_includes_readings_only_when_known() {
        let with = chat_prompt(
            "Managua",
            "¿Cada cuánto riego?",
            Some(Conditions { temp_c: 33.4, humidity_pct: 48.0 }),
        );
        assert!(with.starts_with("City: Managua. Question: ¿Cada cuánto riego?. Temp: 33°C. Humidity: 48%. "));
        assert!(with.contains("ONE actionable, specific tip"));

        let without = chat_prompt("Managua", "¿Cada cuánto riego?", None);
        assert!(!without.contains("Temp:"));
    }

    #[tokio::test]
    async fn model_reply_passes_through() {
        let advisor = Advisor::new(Some(Box::new(CannedModel(Ok("Riega al atardecer.")))), None);
        assert_eq!(advisor.advise("Managua", "hola").await, "Riega al atardecer.");
    }

    #[tokio::test]
    async fn model_failure_falls_back_to_local_tips() {
        let advisor = Advisor::new(Some(Box::new(CannedModel(Err(())))), None);
        let reply = advisor.advise("Managua", "hola").await;
        assert_eq!(reply, local_tips("generic", 25.0, 60.0));
    }

    #[tokio::test]
    async fn missing_model_uses_local_tips() {
        let advisor = Advisor::new(None, None);
        let reply = advisor.advise("Managua", "hola").await;
        assert!(reply.contains("Temperatura moderada"));
    }
}
