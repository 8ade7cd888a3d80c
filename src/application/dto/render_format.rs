/// Graph artifact format
///
/// `Dot` writes the graph description itself; the others are produced by
/// the Graphviz `dot` program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Scalable vector graphics (default)
    #[default]
    Svg,
    Png,
    Pdf,
    /// Raw DOT text, no Graphviz needed
    Dot,
}

impl RenderFormat {
    /// Whether producing this format requires the external `dot` program
    pub fn needs_graphviz(&self) -> bool {
        !matches!(self, RenderFormat::Dot)
    }
}

impl std::str::FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(RenderFormat::Svg),
            "png" => Ok(RenderFormat::Png),
            "pdf" => Ok(RenderFormat::Pdf),
            "dot" | "gv" => Ok(RenderFormat::Dot),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'svg', 'png', 'pdf' or 'dot'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Svg => write!(f, "svg"),
            RenderFormat::Png => write!(f, "png"),
            RenderFormat::Pdf => write!(f, "pdf"),
            RenderFormat::Dot => write!(f, "dot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_render_format_from_str() {
        assert_eq!(RenderFormat::from_str("svg").unwrap(), RenderFormat::Svg);
        assert_eq!(RenderFormat::from_str("PNG").unwrap(), RenderFormat::Png);
        assert_eq!(RenderFormat::from_str("Pdf").unwrap(), RenderFormat::Pdf);
        assert_eq!(RenderFormat::from_str("gv").unwrap(), RenderFormat::Dot);
    }

    #[test]
    fn test_render_format_from_str_invalid() {
        let error = RenderFormat::from_str("jpeg").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("jpeg"));
        assert!(RenderFormat::from_str("").is_err());
    }

    #[test]
    fn test_render_format_display_round_trips() {
        for format in [
            RenderFormat::Svg,
            RenderFormat::Png,
            RenderFormat::Pdf,
            RenderFormat::Dot,
        ] {
            assert_eq!(RenderFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_render_format_default_and_graphviz_need() {
        assert_eq!(RenderFormat::default(), RenderFormat::Svg);
        assert!(RenderFormat::Svg.needs_graphviz());
        assert!(!RenderFormat::Dot.needs_graphviz());
    }
}
