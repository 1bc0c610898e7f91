use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target code-generation stack the imported markup is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stack {
    HtmlCss,
    #[default]
    HtmlTailwind,
    ReactTailwind,
    Bootstrap,
    IonicTailwind,
    VueTailwind,
    Svg,
}

impl Stack {
    pub const ALL: [Stack; 7] = [
        Stack::HtmlCss,
        Stack::HtmlTailwind,
        Stack::ReactTailwind,
        Stack::Bootstrap,
        Stack::IonicTailwind,
        Stack::VueTailwind,
        Stack::Svg,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Stack::HtmlCss => "html_css",
            Stack::HtmlTailwind => "html_tailwind",
            Stack::ReactTailwind => "react_tailwind",
            Stack::Bootstrap => "bootstrap",
            Stack::IonicTailwind => "ionic_tailwind",
            Stack::VueTailwind => "vue_tailwind",
            Stack::Svg => "svg",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stack id: {0}")]
pub struct UnknownStack(pub String);

impl FromStr for Stack {
    type Err = UnknownStack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Stack::ALL
            .into_iter()
            .find(|stack| stack.id() == id)
            .ok_or_else(|| UnknownStack(id.to_string()))
    }
}
