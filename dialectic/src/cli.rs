//! Command-line arguments and their mapping onto provider and session config.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dialectic::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "dialectic")]
#[command(about = "Two language models debate a topic, one turn at a time")]
#[command(version)]
pub struct Cli {
    /// The debate topic
    pub topic: String,

    /// Rounds before the debate ends on its own
    #[arg(short, long, default_value_t = dialectic_session::DEFAULT_MAX_ROUNDS)]
    pub rounds: usize,

    /// Pause between turns, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// API key for the hosted seat
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Model for the hosted seat
    #[arg(long, env = "DIALECTIC_OPENAI_MODEL")]
    pub openai_model: Option<String>,

    /// Base URL of the hosted chat-completions API
    #[arg(long, env = "DIALECTIC_OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Model for the local seat
    #[arg(long, env = "DIALECTIC_OLLAMA_MODEL")]
    pub ollama_model: Option<String>,

    /// Base URL of the local Ollama server
    #[arg(long, env = "DIALECTIC_OLLAMA_BASE_URL")]
    pub ollama_base_url: Option<String>,

    /// How long Ollama keeps the model loaded (e.g. "5m")
    #[arg(long)]
    pub keep_alive: Option<String>,

    /// Sampling temperature for both seats
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Persona (system instruction) for the hosted seat
    #[arg(long)]
    pub hosted_persona: Option<String>,

    /// Persona (system instruction) for the local seat
    #[arg(long)]
    pub local_persona: Option<String>,

    /// Display name of the hosted seat
    #[arg(long, default_value = "openai")]
    pub name_a: String,

    /// Display name of the local seat
    #[arg(long, default_value = "ollama")]
    pub name_b: String,

    /// Write the transcript here when done (`.json` for JSON, otherwise text)
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_rounds: self.rounds,
            turn_delay: Duration::from_millis(self.delay_ms),
            roster: Roster::new(&self.name_a, &self.name_b),
        }
    }

    pub fn hosted_provider(&self) -> OpenAi {
        let mut provider = OpenAi::new(&self.openai_api_key);
        if let Some(model) = &self.openai_model {
            provider = provider.model(model);
        }
        if let Some(url) = &self.openai_base_url {
            provider = provider.base_url(url);
        }
        if let Some(persona) = &self.hosted_persona {
            provider = provider.system_prompt(persona);
        }
        if let Some(temperature) = self.temperature {
            provider = provider.temperature(temperature);
        }
        provider
    }

    pub fn local_provider(&self) -> Ollama {
        let mut provider = Ollama::new();
        if let Some(model) = &self.ollama_model {
            provider = provider.model(model);
        }
        if let Some(url) = &self.ollama_base_url {
            provider = provider.base_url(url);
        }
        if let Some(keep_alive) = &self.keep_alive {
            provider = provider.keep_alive(keep_alive);
        }
        if let Some(persona) = &self.local_persona {
            provider = provider.system_prompt(persona);
        }
        if let Some(temperature) = self.temperature {
            provider = provider.temperature(temperature);
        }
        provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["dialectic"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid args")
    }

    #[test]
    fn defaults_match_session_defaults() {
        let cli = parse(&["--openai-api-key", "k", "Cats or dogs"]);
        let config = cli.session_config();
        assert_eq!(cli.topic, "Cats or dogs");
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.turn_delay, Duration::from_millis(2000));
        assert_eq!(config.roster, Roster::default());
        assert!(cli.export.is_none());
    }

    #[test]
    fn overrides_flow_into_config() {
        let cli = parse(&[
            "--openai-api-key",
            "k",
            "--rounds",
            "4",
            "--delay-ms",
            "0",
            "--name-a",
            "gpt",
            "--name-b",
            "llama",
            "--export",
            "out.json",
            "topic",
        ]);
        let config = cli.session_config();
        assert_eq!(config.max_rounds, 4);
        assert_eq!(config.turn_delay, Duration::ZERO);
        assert_eq!(config.roster.label(Speaker::A), "GPT");
        assert_eq!(cli.export, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn topic_is_required() {
        let result = Cli::try_parse_from(["dialectic", "--openai-api-key", "k"]);
        assert!(result.is_err());
    }
}
