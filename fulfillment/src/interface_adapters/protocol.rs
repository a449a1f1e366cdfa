// Wire DTOs for the conversational platform's webhook request/response.

use crate::domain::{CanvasCommand, CanvasDirective, Reply, Turn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Request payload for one webhook call.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub handler: HandlerDto,
    #[serde(default)]
    pub intent: Option<IntentDto>,
    #[serde(default)]
    pub device: Option<DeviceDto>,
    #[serde(default)]
    pub session: Option<SessionDto>,
}

#[derive(Debug, Deserialize)]
pub struct HandlerDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct IntentDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub params: HashMap<String, IntentParamDto>,
}

// Only the resolved value is used; the spoken `original` is ignored.
#[derive(Debug, Deserialize)]
pub struct IntentParamDto {
    #[serde(default)]
    pub resolved: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeviceDto {
    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    pub id: String,
}

impl From<WebhookRequest> for Turn {
    fn from(request: WebhookRequest) -> Self {
        let color = request
            .intent
            .and_then(|intent| intent.params.get("color")?.resolved.clone())
            .and_then(|resolved| resolved.as_str().map(str::to_string));

        Self {
            handler_name: request.handler.name,
            color,
            capabilities: request.device.unwrap_or_default().capabilities,
        }
    }
}

// Response payload for one webhook call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionDto>,
    pub prompt: PromptDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDto {
    pub first_simple: SimpleDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasDto>,
}

#[derive(Debug, Serialize)]
pub struct SimpleDto {
    pub speech: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub data: Vec<CanvasCommandDto>,
    pub enable_full_screen: bool,
    pub continue_tts_during_touch: bool,
}

/// Canvas command in the `{ "command": NAME, ...payload }` shape the canvas consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanvasCommandDto {
    Tint { tint: u32 },
    Spin { spin: bool },
    RestartGame,
}

#[derive(Debug, Serialize)]
pub struct SceneDto {
    pub next: NextSceneDto,
}

#[derive(Debug, Serialize)]
pub struct NextSceneDto {
    pub name: String,
}

impl From<CanvasCommand> for CanvasCommandDto {
    fn from(command: CanvasCommand) -> Self {
        match command {
            CanvasCommand::Tint { tint } => CanvasCommandDto::Tint { tint },
            CanvasCommand::Spin { spin } => CanvasCommandDto::Spin { spin },
            CanvasCommand::RestartGame => CanvasCommandDto::RestartGame,
        }
    }
}

impl From<CanvasDirective> for CanvasDto {
    fn from(directive: CanvasDirective) -> Self {
        Self {
            url: directive.url,
            data: directive.data.into_iter().map(CanvasCommandDto::from).collect(),
            enable_full_screen: directive.enable_full_screen,
            continue_tts_during_touch: directive.continue_tts_during_touch,
        }
    }
}

impl WebhookResponse {
    pub fn from_reply(reply: Reply, session: Option<SessionDto>) -> Self {
        Self {
            session,
            prompt: PromptDto {
                first_simple: SimpleDto {
                    speech: reply.speech,
                },
                canvas: reply.canvas.map(CanvasDto::from),
            },
            scene: reply.next_scene.map(|name| SceneDto {
                next: NextSceneDto { name },
            }),
        }
    }
}

// Error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
