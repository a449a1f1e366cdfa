use crate::domain::palette::tint_for;
use crate::domain::{CanvasCommand, CanvasDirective, ConversationError, Handler, Reply, Turn};

pub const INTERACTIVE_CANVAS: &str = "INTERACTIVE_CANVAS";
pub const END_CONVERSATION: &str = "actions.page.END_CONVERSATION";

const INSTRUCTIONS: &str = "Do you want me to change color or pause spinning?";

// Maps a resolved conversation turn to speech and canvas commands.
pub struct ConversationUseCase<'a> {
    pub canvas_url: &'a str,
}

impl ConversationUseCase<'_> {
    pub fn execute(&self, turn: Turn) -> Result<Reply, ConversationError> {
        let handler = Handler::from_name(&turn.handler_name)
            .ok_or_else(|| ConversationError::UnknownHandler(turn.handler_name.clone()))?;

        let reply = match handler {
            Handler::Welcome => self.welcome(&turn.capabilities),
            Handler::Fallback => speak(
                "I don't understand. You can change my color or pause spinning.",
                CanvasDirective::default(),
            ),
            Handler::ChangeColor => change_color(turn.color.as_deref()),
            Handler::StartSpin => speak(
                "Ok, I'm spinning. What else?",
                CanvasDirective::command(CanvasCommand::Spin { spin: true }),
            ),
            Handler::StopSpin => speak(
                "Ok, I paused spinning. What else?",
                CanvasDirective::command(CanvasCommand::Spin { spin: false }),
            ),
            Handler::Instructions => speak(INSTRUCTIONS, CanvasDirective::default()),
            Handler::Restart => speak(
                INSTRUCTIONS,
                CanvasDirective::command(CanvasCommand::RestartGame),
            ),
        };
        Ok(reply)
    }

    fn welcome(&self, capabilities: &[String]) -> Reply {
        if !capabilities.iter().any(|c| c == INTERACTIVE_CANVAS) {
            return Reply {
                speech: "Sorry, this device does not support Interactive Canvas!".to_string(),
                canvas: None,
                next_scene: Some(END_CONVERSATION.to_string()),
            };
        }

        speak(
            "Welcome! Do you want me to change color or pause spinning? \
             You can also tell me to ask you later.",
            CanvasDirective {
                url: Some(self.canvas_url.to_string()),
                data: Vec::new(),
                enable_full_screen: true,
                continue_tts_during_touch: true,
            },
        )
    }
}

fn change_color(color: Option<&str>) -> Reply {
    match color.and_then(|name| tint_for(name).map(|tint| (name, tint))) {
        Some((name, tint)) => speak(
            &format!("Ok, I changed my color to {name}. What else?"),
            CanvasDirective::command(CanvasCommand::Tint { tint }),
        ),
        None => speak(
            "Sorry, I don't know that color. Try red, blue, or green!",
            CanvasDirective::default(),
        ),
    }
}

fn speak(speech: &str, canvas: CanvasDirective) -> Reply {
    Reply {
        speech: speech.to_string(),
        canvas: Some(canvas),
        next_scene: None,
    }
}
