// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use crate::Keyword;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum NumericType {
    Int,
    Float,
}

impl NumericType {
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Int => Some(Self::Int),
            Keyword::Float => Some(Self::Float),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    /// Converts a freshly evaluated value to this type. Integers are
    /// truncated towards zero.
    #[must_use]
    pub fn coerce(&self, value: f64) -> f64 {
        match self {
            Self::Int => value.trunc(),
            Self::Float => value,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Variable {
    pub ty: NumericType,
    pub value: f64,
}

#[derive(Default, Debug, Clone)]
pub struct VariableStore {
    variables: HashMap<String, Variable>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the name already exists; the store is left
    /// untouched in that case.
    #[must_use]
    pub fn declare(&mut self, name: &str, ty: NumericType, value: f64) -> bool {
        if self.variables.contains_key(name) {
            return false;
        }

        self.variables.insert(name.to_string(), Variable { ty, value });
        true
    }

    #[must_use]
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.variables.get_mut(name) {
            Some(variable) => {
                variable.value = value;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).map(|x| x.value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.variables.iter().map(|(name, variable)| (name.as_str(), variable))
    }

    /// Variable names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
