//! Script commands
//!
//! ```text
//! register docs title=Docs
//! register {"id": "old", "redirect": "docs"}
//! navigate old
//! hash #!/docs
//! state
//! ```

use serde::Serialize;
use serde_json::{json, Value};

use hashroute_core::{Host, RouteInput, RouteRecord, RouterEvent, RouterOptions};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Register(RouteInput),
    Unregister(String),
    Navigate(String),
    Hash(String),
    Load,
    Configure(RouterOptions),
    State,
    History,
    Routes,
}

impl ScriptCommand {
    /// Blank lines and `//` comments are skipped.
    pub fn is_blank(line: &str) -> bool {
        let line = line.trim();
        line.is_empty() || line.starts_with("//")
    }

    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "register" | "reg" => parse_route(rest).map(ScriptCommand::Register),
            "unregister" | "unreg" => Ok(ScriptCommand::Unregister(require(rest, "unregister")?)),
            "navigate" | "nav" | "go" => Ok(ScriptCommand::Navigate(require(rest, "navigate")?)),
            "hash" => Ok(ScriptCommand::Hash(rest.to_string())),
            "load" => Ok(ScriptCommand::Load),
            "configure" | "config" => serde_json::from_str(rest)
                .map(ScriptCommand::Configure)
                .map_err(|e| format!("configure expects a JSON object: {}", e)),
            "state" => Ok(ScriptCommand::State),
            "history" => Ok(ScriptCommand::History),
            "routes" => Ok(ScriptCommand::Routes),
            "" => Err("Empty command".to_string()),
            other => Err(format!("Unknown command: {}", other)),
        }
    }

    pub fn execute(self, state: &AppState) -> CommandResult<Value> {
        let router = state.router();

        match self {
            ScriptCommand::Register(input) => {
                let id = input.raw_id().trim().to_string();
                if router.register(input) {
                    CommandResult::ok(json!({ "registered": id }))
                } else {
                    CommandResult::err(format!("Route rejected: {:?}", id))
                }
            }
            ScriptCommand::Unregister(id) => {
                CommandResult::ok(json!({ "unregistered": router.unregister(&id) }))
            }
            ScriptCommand::Navigate(id) => {
                if router.navigate(&id) {
                    CommandResult::ok(json!({ "state": router.state(), "href": state.host().href() }))
                } else {
                    CommandResult::err(format!("Navigation to {:?} ignored", id))
                }
            }
            ScriptCommand::Hash(fragment) => {
                state.host().set_hash(&fragment);
                router.hash_change();
                CommandResult::ok(json!({ "state": router.state(), "href": state.host().href() }))
            }
            ScriptCommand::Load => {
                router.load();
                CommandResult::ok(json!({ "state": router.state(), "href": state.host().href() }))
            }
            ScriptCommand::Configure(options) => {
                router.configure(options);
                CommandResult::ok(json!({ "settings": router.settings() }))
            }
            ScriptCommand::State => CommandResult::ok(json!({
                "state": router.state(),
                "href": state.host().href(),
                "title": state.host().title(),
            })),
            ScriptCommand::History => CommandResult::ok(json!({ "history": state.host().history() })),
            ScriptCommand::Routes => {
                let routes: Vec<RouteRecord> = router
                    .paths()
                    .ids()
                    .iter()
                    .filter_map(|id| router.paths().lookup(id))
                    .collect();
                CommandResult::ok(json!({ "settings": router.settings(), "routes": routes }))
            }
        }
    }
}

fn require(rest: &str, command: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("{} needs a route id", command))
    } else {
        Ok(rest.to_string())
    }
}

/// `<id> [title=<text>] [redirect=<id>]` or a JSON route.
fn parse_route(rest: &str) -> Result<RouteInput, String> {
    if rest.starts_with('{') || rest.starts_with('"') {
        return serde_json::from_str(rest).map_err(|e| format!("Invalid route JSON: {}", e));
    }

    let mut parts = rest.split_whitespace();
    let id = parts.next().ok_or_else(|| "register needs a route id".to_string())?;
    let mut record = RouteRecord {
        id: id.to_string(),
        title: None,
        redirect: None,
    };

    for part in parts {
        match part.split_once('=') {
            Some(("title", value)) => record.title = Some(value.replace('_', " ")),
            Some(("redirect", value)) => record.redirect = Some(value.to_string()),
            _ => return Err(format!("Unexpected register argument: {}", part)),
        }
    }

    if record.title.is_none() && record.redirect.is_none() {
        Ok(RouteInput::Id(record.id))
    } else {
        Ok(RouteInput::Record(record))
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandOutput {
    pub command: String,
    pub result: CommandResult<Value>,
    pub events: Vec<RouterEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashroute_core::EventKind;

    fn state() -> AppState {
        AppState::new(None, "http://localhost/").unwrap()
    }

    #[test]
    fn test_parse_register_forms() {
        assert_eq!(
            ScriptCommand::parse("register docs").unwrap(),
            ScriptCommand::Register(RouteInput::Id("docs".to_string()))
        );

        let cmd = ScriptCommand::parse("reg old redirect=new title=Old_Page").unwrap();
        match cmd {
            ScriptCommand::Register(RouteInput::Record(record)) => {
                assert_eq!(record.redirect.as_deref(), Some("new"));
                assert_eq!(record.title.as_deref(), Some("Old Page"));
            }
            other => panic!("Expected record registration, got {:?}", other),
        }

        let cmd = ScriptCommand::parse(r#"register {"id": "a", "title": "A page"}"#).unwrap();
        assert!(matches!(cmd, ScriptCommand::Register(RouteInput::Record(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ScriptCommand::parse("navigate").is_err());
        assert!(ScriptCommand::parse("register docs colour=red").is_err());
        assert!(ScriptCommand::parse("configure {").is_err());
        assert!(ScriptCommand::parse("fly away").is_err());
    }

    #[test]
    fn test_blank_lines() {
        assert!(ScriptCommand::is_blank("   "));
        assert!(ScriptCommand::is_blank("// setup"));
        assert!(!ScriptCommand::is_blank("state"));
    }

    #[test]
    fn test_script_session() {
        let state = state();

        assert!(state.execute_line("register docs title=Docs").result.success);
        assert!(state.execute_line("register old redirect=docs").result.success);

        let output = state.execute_line("navigate old");
        assert!(output.result.success);
        assert_eq!(
            output.events,
            vec![RouterEvent::new(EventKind::RouterUpdate, "docs")]
        );
        assert_eq!(state.host().href(), "http://localhost/#/docs");

        let output = state.execute_line("hash #/nowhere");
        assert_eq!(output.events[0].event, EventKind::NotFound);

        let output = state.execute_line("configure {\"prefix\": \"app\"}");
        assert_eq!(output.result.data.unwrap()["settings"]["prefix"], "app");
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let output = state().execute_line("teleport home");
        assert!(!output.result.success);
        assert!(output.events.is_empty());
    }
}
