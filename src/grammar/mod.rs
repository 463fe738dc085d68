/*
    This module is for storing and manipulating grammars
*/

pub mod builtin;

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use itertools::Itertools;

// The base unit in a grammar rule. Whether an element is a terminal or a
// nonterminal is settled when the grammar is built, never at generation time.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

// A grammar written as plain data: each entry is a symbol name and its
// alternatives. Any element that names an entry of the table is a
// nonterminal, everything else is a terminal.
pub type Table<'a> = &'a [(&'a str, &'a [&'a [&'a str]])];

#[derive(Debug, PartialEq)]
pub struct Grammar {
    pub start_symbol: String,
    pub rules: HashMap<String, Rewrite>,
}

impl Grammar {
    /// Builds a grammar from a table. The first entry becomes the start
    /// symbol. Later entries with the same name replace earlier ones.
    pub fn from_table(table: Table<'_>) -> Self {
        let names: HashSet<&str> = table.iter().map(|(name, _)| *name).collect();

        let classify = |element: &&str| {
            if names.contains(*element) {
                Symbol::Nonterminal(element.to_string())
            } else {
                Symbol::Terminal(element.to_string())
            }
        };

        let rules = table.iter()
            .map(|(name, alternatives)| {
                let rewrite = alternatives.iter()
                    .map(|alternative| alternative.iter().map(classify).collect_vec())
                    .collect_vec();
                (name.to_string(), rewrite)
            })
            .collect();

        Grammar {
            start_symbol: table.first().map(|(name, _)| name.to_string()).unwrap_or_default(),
            rules
        }
    }

    pub fn rewrite(&self, symbol: &str) -> Option<&Rewrite> {
        self.rules.get(symbol)
    }

    /// Every terminal that some derivation starting at `start` can emit.
    /// Nonterminals without a rule are skipped.
    pub fn reachable_terminals(&self, start: &str) -> HashSet<&str> {
        let mut terminals = HashSet::new();
        let mut seen = HashSet::from([start]);
        let mut pending = vec![start];

        while let Some(symbol) = pending.pop() {
            let Some(rewrite) = self.rules.get(symbol) else {
                continue;
            };

            for element in rewrite.iter().flatten() {
                match element {
                    Symbol::Terminal(text) => {
                        terminals.insert(text.as_str());
                    }
                    Symbol::Nonterminal(name) => {
                        if seen.insert(name.as_str()) {
                            pending.push(name.as_str());
                        }
                    }
                }
            }
        }

        terminals
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(text) => write!(f, "{:?}", text),
            Symbol::Nonterminal(name) => write!(f, "{}", name),
        }
    }
}

// Prints one rule per line, start symbol first and the rest by name
impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let is_start = |name: &String| *name == self.start_symbol;
        let names = self.rules.keys()
            .sorted_by(|a, b| is_start(*b).cmp(&is_start(*a)).then(a.cmp(b)));

        for name in names {
            let rewrite = self.rules[name].iter()
                .map(|alternative| alternative.iter().join(" "))
                .join(" | ");
            writeln!(f, "{} = {}", name, rewrite)?;
        }

        Ok(())
    }
}
