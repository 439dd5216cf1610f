use rand::Rng;

use crate::config::LauncherConfig;

use super::lexer::{self, Token};
use super::types::{ParsedCommand, StructuredLaunch};
use super::uri;

/// Upper bound (inclusive) of the number in a generated `tag_<n>` name.
pub const PLACEHOLDER_TAG_MAX: u32 = 1336;

/// Classifies raw command text; holds only the integration flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandParser {
    integrated: bool,
}

impl CommandParser {
    pub fn new(integrated: bool) -> Self {
        Self { integrated }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.integrated)
    }

    pub fn is_integrated(&self) -> bool {
        self.integrated
    }

    /// Classify `raw` into exactly one [`ParsedCommand`].
    ///
    /// URL-shaped input wins over search, search over the structured syntax.
    pub fn classify(&self, raw: &str) -> ParsedCommand {
        self.classify_with(raw, &mut rand::thread_rng())
    }

    /// Same as [`classify`](Self::classify) with a caller-provided source for
    /// placeholder tag numbers.
    pub fn classify_with<R: Rng>(&self, raw: &str, rng: &mut R) -> ParsedCommand {
        if raw.trim().is_empty() {
            return ParsedCommand::Empty;
        }
        if let Some(url) = uri::match_uri(raw) {
            return ParsedCommand::Uri { url };
        }
        if let Some((engine, query)) = uri::match_search(raw) {
            return ParsedCommand::Uri {
                url: engine.url_for(query),
            };
        }
        if self.integrated {
            return classify_integrated(raw, rng);
        }
        ParsedCommand::Shell {
            text: raw.to_string(),
        }
    }
}

/// Classify with a throwaway parser.
pub fn classify(raw: &str, integrated: bool) -> ParsedCommand {
    CommandParser::new(integrated).classify(raw)
}

fn classify_integrated<R: Rng>(raw: &str, rng: &mut R) -> ParsedCommand {
    if let Some(name) = raw.strip_prefix(':') {
        return ParsedCommand::MethodRef {
            name: name.trim().to_string(),
        };
    }
    match lexer::tokenize(raw) {
        Ok(tokens) => ParsedCommand::Launch(build_launch(tokens, rng)),
        Err(error) => {
            tracing::debug!("treating input as app name: {error}");
            ParsedCommand::Launch(StructuredLaunch::app(raw))
        }
    }
}

fn build_launch<R: Rng>(tokens: Vec<Token<'_>>, rng: &mut R) -> StructuredLaunch {
    let mut launch = StructuredLaunch::default();
    for token in tokens {
        match token {
            Token::Tag(name) => launch.push_tag(name),
            Token::View(name) => launch.push_view(name),
            Token::Modes(modes) => launch.modes.extend(modes),
            Token::Word(word) => launch.push_word(word),
        }
    }
    if launch.needs_placeholder_tag() {
        launch.tags.push(placeholder_tag(rng));
    }
    launch
}

fn placeholder_tag<R: Rng>(rng: &mut R) -> String {
    format!("tag_{}", rng.gen_range(0..=PLACEHOLDER_TAG_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::types::Mode;

    fn launch(raw: &str) -> StructuredLaunch {
        match classify(raw, true) {
            ParsedCommand::Launch(launch) => launch,
            other => panic!("expected launch, got {other:?}"),
        }
    }

    fn placeholder_number(tag: &str) -> u32 {
        tag.strip_prefix("tag_")
            .and_then(|n| n.parse().ok())
            .expect("placeholder tag")
    }

    #[test]
    fn empty_input_is_sentinel() {
        assert_eq!(classify("", false), ParsedCommand::Empty);
        assert_eq!(classify("   ", true), ParsedCommand::Empty);
    }

    #[test]
    fn url_gets_default_scheme() {
        assert_eq!(
            classify("w example.com/docs", false),
            ParsedCommand::Uri {
                url: "http://example.com/docs".to_string()
            }
        );
    }

    #[test]
    fn url_wins_in_integrated_mode() {
        assert_eq!(
            classify("https://example.com", true),
            ParsedCommand::Uri {
                url: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn classified_urls_always_have_scheme() {
        for raw in [
            "w example.com",
            "w ftp://example.com",
            "https://a.b.example.io/x",
            "HTTP://EXAMPLE.COM",
            "w FTP://files.example.org",
            "https://example.com:8080/path",
            "g something",
            "s other thing",
        ] {
            let ParsedCommand::Uri { url } = classify(raw, false) else {
                panic!("expected uri for {raw}");
            };
            assert!(
                ["http://", "https://", "ftp://"]
                    .iter()
                    .any(|scheme| url.starts_with(scheme)),
                "{url}"
            );
        }
    }

    #[test]
    fn google_search_escapes_space() {
        assert_eq!(
            classify("g hello world", false),
            ParsedCommand::Uri {
                url: "https://www.google.com/#q=hello%20world".to_string()
            }
        );
    }

    #[test]
    fn duckduckgo_search() {
        assert_eq!(
            classify("s foo", false),
            ParsedCommand::Uri {
                url: "https://duckduckgo.com/?q=foo".to_string()
            }
        );
    }

    #[test]
    fn plain_mode_falls_back_to_shell() {
        assert_eq!(
            classify("firefox --private", false),
            ParsedCommand::Shell {
                text: "firefox --private".to_string()
            }
        );
    }

    #[test]
    fn method_reference() {
        assert_eq!(
            classify(":saved_launch", true),
            ParsedCommand::MethodRef {
                name: "saved_launch".to_string()
            }
        );
        assert_eq!(
            classify(":  spaced ", true),
            ParsedCommand::MethodRef {
                name: "spaced".to_string()
            }
        );
    }

    #[test]
    fn method_reference_needs_integration() {
        assert_eq!(
            classify(":saved_launch", false),
            ParsedCommand::Shell {
                text: ":saved_launch".to_string()
            }
        );
    }

    #[test]
    fn explicit_tag_suppresses_placeholder() {
        let launch = launch("#work @main ^floatApp");
        assert_eq!(launch.tags, vec!["work"]);
        assert_eq!(launch.views, vec!["main"]);
        assert_eq!(launch.app, "floatApp");
        assert_eq!(launch.modes, vec![Mode::Float]);
    }

    #[test]
    fn leading_sigil_maps_through_table() {
        let launch = launch("#work @main +floatApp");
        assert_eq!(launch.app, "floatApp");
        assert_eq!(launch.modes, vec![Mode::Full]);
    }

    #[test]
    fn view_without_tag_gets_placeholder() {
        let launch = launch("@main someApp");
        assert_eq!(launch.views, vec!["main"]);
        assert_eq!(launch.app, "someApp");
        assert!(launch.modes.is_empty());
        assert_eq!(launch.tags.len(), 1);
        assert!(placeholder_number(&launch.tags[0]) <= PLACEHOLDER_TAG_MAX);
    }

    #[test]
    fn no_placeholder_without_app() {
        let launch = launch("@main ^");
        assert!(launch.tags.is_empty());
        assert_eq!(launch.modes, vec![Mode::Float]);
    }

    #[test]
    fn placeholder_number_comes_from_rng() {
        struct Fixed;
        impl rand::RngCore for Fixed {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0);
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                dest.fill(0);
                Ok(())
            }
        }
        let parsed = CommandParser::new(true).classify_with("@www xterm", &mut Fixed);
        let ParsedCommand::Launch(launch) = parsed else {
            panic!("expected launch");
        };
        assert_eq!(launch.tags, vec!["tag_0"]);
    }

    #[test]
    fn multi_word_app_and_modes() {
        let launch = launch("+^ urxvt -e htop *");
        assert_eq!(launch.app, "urxvt -e htop");
        assert_eq!(launch.modes, vec![Mode::Full, Mode::Float, Mode::Stick]);
    }

    #[test]
    fn tag_glued_to_sigil_stays_a_tag() {
        let launch = launch("+#work xterm");
        assert_eq!(launch.tags, vec!["work"]);
        assert_eq!(launch.app, "xterm");
        assert_eq!(launch.modes, vec![Mode::Full]);
    }

    #[test]
    fn port_url_is_not_a_shell_line() {
        assert_eq!(
            classify("https://example.com:8080/path", false),
            ParsedCommand::Uri {
                url: "https://example.com:8080/path".to_string()
            }
        );
    }

    #[test]
    fn invalid_structure_becomes_literal_app() {
        assert_eq!(launch("xterm #"), StructuredLaunch::app("xterm #"));
        assert_eq!(
            launch("xterm @my.view"),
            StructuredLaunch::app("xterm @my.view")
        );
    }

    #[test]
    fn search_wins_over_structured() {
        assert!(matches!(classify("g #work", true), ParsedCommand::Uri { .. }));
    }

    #[test]
    fn from_config_reads_integration_flag() {
        let config = LauncherConfig {
            integrated: true,
            ..LauncherConfig::default()
        };
        assert!(CommandParser::from_config(&config).is_integrated());
    }
}
