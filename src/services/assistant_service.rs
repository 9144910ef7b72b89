// src/services/assistant_service.rs
//
// Cliente fino sobre a API generateContent do Gemini. Toda falha degrada
// para um texto fixo visível ao usuário; nenhuma chamada toca o estado das
// entidades.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::common::error::AppError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Modelos por tarefa: flash para texto simples, pro para raciocínio mais
// longo, lite para follow-ups e o modelo TTS dedicado para voz.
const FLASH_MODEL: &str = "gemini-3-flash-preview";
const PRO_MODEL: &str = "gemini-3-pro-preview";
const LITE_MODEL: &str = "gemini-flash-lite-latest";
const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

const FALLBACK_CONNECT: &str = "Erro ao conectar com o serviço de IA.";
const FALLBACK_RISK: &str = "Erro ao analisar riscos.";
const FALLBACK_CHAT: &str = "Erro no chat.";
const FALLBACK_FOLLOW_UP: &str = "Erro ao conectar.";
const FALLBACK_TRANSCRIPTION: &str = "Erro na transcrição.";

// --- Construção de prompts (puras, testáveis) ---

fn collection_message_prompt(tenant_name: &str, amount: Decimal, days_overdue: i64) -> String {
    format!(
        "Escreva uma mensagem formal e educada de cobrança (curta, para WhatsApp) para o \
         inquilino {tenant_name}, referente a um débito de R$ {amount} que está atrasado há \
         {days_overdue} dias. Inclua instruções para contatar o setor financeiro."
    )
}

fn legal_summary_prompt(case_details: &str) -> String {
    format!(
        "Você é um assistente jurídico experiente. Resuma os seguintes detalhes do processo \
         em um parágrafo conciso para um relatório de status: {case_details}"
    )
}

fn risk_analysis_prompt(text: &str) -> String {
    format!(
        "Analise o seguinte texto jurídico/contratual e identifique potenciais riscos, \
         cláusulas abusivas ou pontos de atenção para a imobiliária. Seja detalhista e \
         estratégico:\n\n{text}"
    )
}

fn chat_prompt(message: &str) -> String {
    format!(
        "Você é o assistente virtual inteligente do sistema ImobFlow. Ajude o usuário com \
         dúvidas sobre imobiliária, jurídico ou o uso do sistema. Responda de forma curta e \
         prestativa.\n\nUsuário: {message}"
    )
}

fn follow_up_prompt(client_name: &str, stage: &str) -> String {
    format!(
        "Gere um e-mail curto e profissional de follow-up para o cliente {client_name} que \
         está na fase de {stage} do funil de vendas de imóveis."
    )
}

const TRANSCRIPTION_PROMPT: &str = "Transcreva este áudio em português com precisão.";

#[derive(Clone)]
pub struct AssistantService {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl AssistantService {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            tracing::warn!(
                "GEMINI_API_KEY ausente: o assistente responderá apenas com os textos de fallback."
            );
        }
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Mensagem de cobrança pronta para WhatsApp.
    pub async fn collection_message(
        &self,
        tenant_name: &str,
        amount: Decimal,
        days_overdue: i64,
    ) -> String {
        let prompt = collection_message_prompt(tenant_name, amount, days_overdue);
        self.generate_text(FLASH_MODEL, &prompt, FALLBACK_CONNECT)
            .await
    }

    /// Resumo de processo para relatório de status.
    pub async fn legal_summary(&self, case_details: &str) -> String {
        let prompt = legal_summary_prompt(case_details);
        self.generate_text(FLASH_MODEL, &prompt, FALLBACK_CONNECT)
            .await
    }

    /// Análise de riscos de texto contratual.
    pub async fn risk_analysis(&self, text: &str) -> String {
        let prompt = risk_analysis_prompt(text);
        self.generate_text(PRO_MODEL, &prompt, FALLBACK_RISK).await
    }

    /// Chat geral do sistema.
    pub async fn chat(&self, message: &str) -> String {
        let prompt = chat_prompt(message);
        self.generate_text(PRO_MODEL, &prompt, FALLBACK_CHAT).await
    }

    /// E-mail de follow-up do funil de vendas.
    pub async fn follow_up(&self, client_name: &str, stage: &str) -> String {
        let prompt = follow_up_prompt(client_name, stage);
        self.generate_text(LITE_MODEL, &prompt, FALLBACK_FOLLOW_UP)
            .await
    }

    /// Transcreve um áudio (base64) gravado pela View.
    pub async fn transcribe(&self, audio_base64: &str, mime_type: &str) -> String {
        let body = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": mime_type, "data": audio_base64 } },
                    { "text": TRANSCRIPTION_PROMPT }
                ]
            }]
        });

        match self.generate(FLASH_MODEL, body).await {
            Ok(response) => extract_text(&response).unwrap_or_default(),
            Err(err) => {
                tracing::error!("Erro Transcrição: {err}");
                FALLBACK_TRANSCRIPTION.to_owned()
            }
        }
    }

    /// Sintetiza fala (PCM 16-bit mono 24kHz) para o texto dado. Aqui a
    /// falha vira erro de gateway: não existe áudio de fallback razoável.
    pub async fn speech(&self, text: &str) -> Result<Vec<u8>, AppError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": text }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } }
                }
            }
        });

        let response = self.generate(TTS_MODEL, body).await.map_err(|err| {
            tracing::error!("Erro TTS: {err}");
            AppError::AssistantUnavailable
        })?;

        let encoded = extract_inline_data(&response).ok_or(AppError::AssistantUnavailable)?;
        BASE64
            .decode(encoded)
            .map_err(|_| AppError::AssistantUnavailable)
    }

    async fn generate_text(&self, model: &str, prompt: &str, fallback: &str) -> String {
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });
        match self.generate(model, body).await {
            Ok(response) => extract_text(&response).unwrap_or_else(|| fallback.to_owned()),
            Err(err) => {
                tracing::error!("Erro Gemini ({model}): {err}");
                fallback.to_owned()
            }
        }
    }

    async fn generate(&self, model: &str, body: Value) -> anyhow::Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY não configurada"))?;

        let url = format!("{GEMINI_BASE_URL}/{model}:generateContent");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

// O texto vem em candidates[0].content.parts[0].text
fn extract_text(response: &Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_owned)
}

// O áudio TTS vem como base64 em parts[0].inlineData.data
fn extract_inline_data(response: &Value) -> Option<&str> {
    response["candidates"][0]["content"]["parts"][0]["inlineData"]["data"].as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_prompt_carries_debt_context() {
        let prompt = collection_message_prompt("Lucia Mendes", Decimal::new(3_200_00, 2), 15);
        assert!(prompt.contains("Lucia Mendes"));
        assert!(prompt.contains("R$ 3200.00"));
        assert!(prompt.contains("atrasado há 15 dias"));
        assert!(prompt.contains("setor financeiro"));
    }

    #[test]
    fn legal_summary_prompt_embeds_details() {
        let prompt = legal_summary_prompt("Processo: 123, Status: Protocolado");
        assert!(prompt.starts_with("Você é um assistente jurídico"));
        assert!(prompt.ends_with("Processo: 123, Status: Protocolado"));
    }

    #[test]
    fn chat_prompt_keeps_persona_and_message() {
        let prompt = chat_prompt("Como abro uma demanda?");
        assert!(prompt.contains("ImobFlow"));
        assert!(prompt.ends_with("Usuário: Como abro uma demanda?"));
    }

    #[test]
    fn extract_text_reads_first_candidate() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Olá!" }] }
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("Olá!"));
        assert_eq!(extract_text(&json!({})), None);
    }

    #[test]
    fn extract_inline_data_reads_audio_payload() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "data": "AAAA" } }] }
            }]
        });
        assert_eq!(extract_inline_data(&response), Some("AAAA"));
        assert_eq!(extract_inline_data(&json!({"candidates": []})), None);
    }

    #[tokio::test]
    async fn missing_api_key_degrades_to_fallback_text() {
        let service = AssistantService::new(None);
        let reply = service.chat("olá").await;
        assert_eq!(reply, FALLBACK_CHAT);

        let reply = service
            .collection_message("Roberto", Decimal::ONE_HUNDRED, 10)
            .await;
        assert_eq!(reply, FALLBACK_CONNECT);

        let err = service.speech("olá").await.unwrap_err();
        assert!(matches!(err, AppError::AssistantUnavailable));
    }
}
