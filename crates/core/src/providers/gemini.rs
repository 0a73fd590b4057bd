use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::CarSearchProvider;
use crate::errors::CoreError;
use crate::models::vehicle::CandidateVehicle;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default Gemini model used for car lookups.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini (Generative Language API) car search provider.
///
/// Sends a Thai-language prompt asking for at most 5 vehicles matching
/// the query and constrains the reply with a JSON response schema, so the
/// payload parses straight into `CandidateVehicle` values.
///
/// Requires an API key. The key travels as a URL query parameter, which
/// is why `CoreError`'s reqwest conversion redacts query strings.
pub struct GeminiSearchProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiSearchProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Parse the JSON text Gemini returns inside its candidate part.
    ///
    /// Public so the payload contract can be tested without a live
    /// service. The schema asks for an array; anything else is a
    /// malformed response.
    pub fn parse_payload(raw: &str) -> Result<Vec<CandidateVehicle>, CoreError> {
        serde_json::from_str::<Vec<CandidateVehicle>>(raw.trim()).map_err(|e| {
            CoreError::MalformedResponse {
                provider: "Gemini".into(),
                message: format!("Expected a JSON array of vehicles: {e}"),
            }
        })
    }

    fn build_prompt(query: &str) -> String {
        format!(
            "คุณคือ AI assistant สำหรับแอปพลิเคชันคำนวณไฟแนนซ์รถยนต์ในประเทศไทย\n\
             วิเคราะห์คำค้นหาของผู้ใช้: \"{query}\" แล้วส่งคืนข้อมูลรถยนต์ที่เกี่ยวข้อง\n\
             ไม่เกิน 5 รายการ เป็น JSON array เท่านั้น โดยรถแต่ละคันมีโครงสร้าง:\n\
             - brand: ยี่ห้อรถยนต์ (ภาษาไทยหรืออังกฤษ)\n\
             - model: รุ่นรถยนต์\n\
             - trim: รุ่นย่อย (ถ้าไม่มีให้ใส่สตริงว่าง \"\")\n\
             - price: ราคาประเมินในประเทศไทย (หน่วยเป็นบาท, ตัวเลขเท่านั้น)\n\
             - imageUrl: URL รูปภาพภายนอกของรถยนต์ (หาไม่ได้จริงๆ จึงใส่ null)\n\
             - brandLogoUrl: URL โลโก้ยี่ห้อรถยนต์ (หาไม่ได้จริงๆ จึงใส่ null)"
        )
    }

    fn response_schema() -> serde_json::Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "brand": { "type": "STRING" },
                    "model": { "type": "STRING" },
                    "trim": { "type": "STRING" },
                    "price": { "type": "NUMBER" },
                    "imageUrl": { "type": "STRING" },
                    "brandLogoUrl": { "type": "STRING" }
                },
                "required": ["brand", "model", "trim", "price"]
            }
        })
    }
}

// ── Gemini API response types ───────────────────────────────────────

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CarSearchProvider for GeminiSearchProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn search(&self, query: &str) -> Result<Vec<CandidateVehicle>, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::MissingApiKey("Gemini".into()));
        }

        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key,
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": Self::build_prompt(query) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
            },
        });

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: "Gemini".into(),
                message: format!("HTTP {status} from generateContent"),
            });
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(|e| CoreError::MalformedResponse {
                provider: "Gemini".into(),
                message: format!("Failed to parse generateContent envelope: {e}"),
            })?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| CoreError::MalformedResponse {
                provider: "Gemini".into(),
                message: "Response contained no candidate text".into(),
            })?;

        Self::parse_payload(text)
    }
}
