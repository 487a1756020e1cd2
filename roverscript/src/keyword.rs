// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Backward,
    Float,
    Forward,
    Goto,
    Int,
    Left,
    Right,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Keywords cannot be used as variable names.
    #[must_use]
    pub fn is_reserved(input: &str) -> bool {
        Self::parse(input).is_some()
    }
}
