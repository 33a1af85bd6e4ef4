//! Parse `group:artifact:version[:...]` descriptor strings.

use std::str::FromStr;

use super::Coordinate;

/// Returned when a descriptor string does not name a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordinateError {
    /// Fewer than three `:`-separated segments, or an empty group/artifact/version.
    #[error("no coordinate in {0:?} (expected group:artifact:version)")]
    NoCoordinate(String),
}

impl Coordinate {
    /// Parses a colon-delimited descriptor. Segments past the third are ignored;
    /// scope and optional stay at their defaults.
    pub fn parse(text: &str) -> Result<Self, ParseCoordinateError> {
        let mut tokens = text.split(':');
        let (group, artifact, version) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(g), Some(a), Some(v)) if !g.is_empty() && !a.is_empty() && !v.is_empty() => {
                (g, a, v)
            }
            _ => return Err(ParseCoordinateError::NoCoordinate(text.to_string())),
        };
        Ok(Coordinate::new(group, artifact, version))
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_segments() {
        let c = Coordinate::parse("com.google.guava:guava:32.1.2-jre").unwrap();
        assert_eq!(c.group_id, "com.google.guava");
        assert_eq!(c.artifact_id, "guava");
        assert_eq!(c.version, "32.1.2-jre");
        assert!(c.scope.is_empty());
        assert!(!c.optional);
    }

    #[test]
    fn parse_fewer_than_three_segments_is_no_coordinate() {
        for text in ["", "guava", "com.google.guava:guava", "a:"] {
            assert_eq!(
                Coordinate::parse(text),
                Err(ParseCoordinateError::NoCoordinate(text.to_string())),
                "input {:?}",
                text
            );
        }
    }

    #[test]
    fn parse_empty_segment_is_no_coordinate() {
        assert!(Coordinate::parse("a::1.0").is_err());
        assert!(Coordinate::parse(":b:1.0").is_err());
        assert!(Coordinate::parse("a:b:").is_err());
    }

    #[test]
    fn parse_keeps_surrounding_whitespace() {
        let c = Coordinate::parse(" g:a:1.0 ").unwrap();
        assert_eq!(c.group_id, " g");
        assert_eq!(c.version, "1.0 ");
        assert!(Coordinate::parse(" :a:1.0").is_ok());
    }

    #[test]
    fn parse_extra_segments_ignored() {
        let c: Coordinate = "org.example:lib:1.0:jar:sources".parse().unwrap();
        assert_eq!(c.id(), "org.example:lib:1.0");
    }

    #[test]
    fn id_round_trips_parsed_fields() {
        for text in [
            "org.example:lib:1.0",
            "io.netty:netty-all:4.1.100.Final",
            "g:a:[1.0,2.0]",
            "g:a:${project.version}",
        ] {
            let c = Coordinate::parse(text).unwrap();
            assert_eq!(c.id(), text);
            assert_eq!(Coordinate::parse(&c.id()).unwrap(), c);
        }
    }
}
