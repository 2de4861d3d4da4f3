use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::AppConfig;
use crate::engine::prompt_builder::ASSISTANT_TOKEN;
use crate::error::TurnError;
use crate::model::llm_decode::decode_generated_text;

#[derive(Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
}

/// Anything that can turn a built prompt into the assistant's reply text.
pub trait InferenceBackend {
    fn generate(&self, prompt: &str) -> Result<String, TurnError>;
}

/// Hugging Face hosted inference over blocking HTTP.
pub struct HfInferenceClient {
    http: Client,
    api_url: String,
    token: String,
}

impl HfInferenceClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // No deadline: a slow endpoint holds the turn as long as it likes.
        let http = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self::with_http(http, config))
    }

    fn with_http(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.clone(),
            token: config.hf_token.clone(),
        }
    }
}

impl InferenceBackend for HfInferenceClient {
    fn generate(&self, prompt: &str) -> Result<String, TurnError> {
        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest { inputs: prompt })
            .send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;
        log::info!("[llm] Endpoint answered HTTP {} ({} bytes)", status, body.len());

        reply_from_response(status, &body)
    }
}

/// Map an HTTP status and body to the reply, or to the turn's error.
pub fn reply_from_response(status: u16, body: &str) -> Result<String, TurnError> {
    if status != 200 {
        return Err(TurnError::RemoteFailure {
            status,
            body: body.to_string(),
        });
    }

    let generated = decode_generated_text(body)?;
    Ok(extract_reply(&generated))
}

/// The endpoint echoes the prompt before its completion, so the reply is
/// whatever follows the last assistant token. A completion that itself
/// contains the token gets cut to the text after it.
pub fn extract_reply(generated: &str) -> String {
    generated
        .rsplit(ASSISTANT_TOKEN)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::prompt_builder::PromptBuilder;
    use crate::model::message::Message;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn extracts_text_after_echoed_prompt() {
        let prompt = PromptBuilder::build(
            &[Message::user("hi"), Message::assistant("hey"), Message::user("joke?")],
            "S",
        );
        for reply in ["Hello there!", "  padded \n", "multi\nline reply", ""] {
            let generated = format!("{prompt}{ASSISTANT_TOKEN}{reply}");
            assert_eq!(extract_reply(&generated), reply.trim());
        }
    }

    #[test]
    fn reply_containing_token_keeps_only_last_segment() {
        let generated = "<|system|>S<|user|>hi<|assistant|>part one<|assistant|> part two ";
        assert_eq!(extract_reply(generated), "part two");
    }

    #[test]
    fn missing_token_returns_whole_text_trimmed() {
        assert_eq!(extract_reply("  just text  "), "just text");
    }

    #[test]
    fn ok_response_yields_extracted_reply() {
        let body = r#"[{"generated_text": "<|system|>S<|user|>hi<|assistant|>Hello there!"}]"#;
        assert_eq!(reply_from_response(200, body).unwrap(), "Hello there!");
    }

    #[test]
    fn non_200_is_remote_failure_with_raw_body() {
        assert_eq!(
            reply_from_response(503, "server busy"),
            Err(TurnError::RemoteFailure {
                status: 503,
                body: "server busy".into()
            })
        );
    }

    #[test]
    fn other_success_codes_are_still_remote_failures() {
        assert!(matches!(
            reply_from_response(201, r#"[{"generated_text": "x"}]"#),
            Err(TurnError::RemoteFailure { status: 201, .. })
        ));
    }

    #[test]
    fn ok_with_bad_body_is_parse_failure() {
        assert_eq!(
            reply_from_response(200, r#"{"error": "loading"}"#),
            Err(TurnError::ParseFailure)
        );
    }

    struct Captured {
        head: String,
        body: String,
    }

    /// Serves one canned HTTP response and hands back what the client sent.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/models/test", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut head = String::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                head.push_str(&line.to_ascii_lowercase());
            }

            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            let mut raw = vec![0u8; len];
            reader.read_exact(&mut raw).unwrap();

            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            Captured {
                head,
                body: String::from_utf8(raw).unwrap(),
            }
        });

        (url, handle)
    }

    fn client_for(url: String) -> HfInferenceClient {
        let http = Client::builder().no_proxy().build().unwrap();
        HfInferenceClient::with_http(
            http,
            &AppConfig {
                api_url: url,
                hf_token: "hf_test".into(),
            },
        )
    }

    #[test]
    fn builds_default_client() {
        let cfg = AppConfig {
            api_url: "http://127.0.0.1:1/".into(),
            hf_token: "hf_test".into(),
        };
        assert!(HfInferenceClient::new(&cfg).is_ok());
    }

    #[test]
    fn posts_inputs_with_bearer_token() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"generated_text": "<|system|>S<|user|>hi<|assistant|>Hello there!"}]"#,
        );

        let reply = client_for(url).generate("<|system|>S<|user|>hi<|assistant|>");
        let sent = server.join().unwrap();

        assert_eq!(reply.unwrap(), "Hello there!");
        assert!(sent.head.starts_with("post /models/test "));
        assert!(sent.head.contains("authorization: bearer hf_test"));
        let payload: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({ "inputs": "<|system|>S<|user|>hi<|assistant|>" })
        );
    }

    #[test]
    fn surfaces_error_status_and_body() {
        let (url, server) = serve_once("HTTP/1.1 503 Service Unavailable", "server busy");

        let err = client_for(url).generate("p").unwrap_err();
        server.join().unwrap();

        assert_eq!(
            err,
            TurnError::RemoteFailure {
                status: 503,
                body: "server busy".into()
            }
        );
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let err = client_for(url).generate("p").unwrap_err();
        assert!(matches!(err, TurnError::Transport(_)));
    }
}
