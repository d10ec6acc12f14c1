//! Direct-call invocations of a logger

use std::fmt::Display;

use crate::level::Level;

/// A direct call on a logger, with or without an explicit level
///
/// Callers that know the level up front build `Explicit` themselves;
/// [`Invocation::from_args`] recovers it from a leading level-name argument.
#[derive(Clone, Copy)]
pub enum Invocation<'a, 'b> {
    /// Dispatch `args` at `level`
    Explicit {
        level: Level,
        args: &'a [&'b dyn Display],
    },
    /// Dispatch `args` at [`Invocation::DEFAULT_LEVEL`]
    Implicit { args: &'a [&'b dyn Display] },
}

impl<'a, 'b> Invocation<'a, 'b> {
    /// Level used when the call names none
    pub const DEFAULT_LEVEL: Level = Level::Debug;

    pub fn at(level: Level, args: &'a [&'b dyn Display]) -> Self {
        Invocation::Explicit { level, args }
    }

    pub fn implicit(args: &'a [&'b dyn Display]) -> Self {
        Invocation::Implicit { args }
    }

    /// Treat the first argument as the level if its text is exactly a level
    /// name and more arguments follow.
    ///
    /// Anything else, including `"INFO"`, a lone `"error"` or an empty list, is
    /// an implicit call carrying every argument as payload.
    pub fn from_args(args: &'a [&'b dyn Display]) -> Self {
        match args.split_first() {
            Some((first, rest)) if !rest.is_empty() => match Level::from_name(&first.to_string()) {
                Some(level) => Invocation::Explicit { level, args: rest },
                None => Invocation::Implicit { args },
            },
            _ => Invocation::Implicit { args },
        }
    }

    /// Level the payload is dispatched at
    pub fn level(&self) -> Level {
        match self {
            Invocation::Explicit { level, .. } => *level,
            Invocation::Implicit { .. } => Self::DEFAULT_LEVEL,
        }
    }

    /// Message payload
    pub fn args(&self) -> &'a [&'b dyn Display] {
        match self {
            Invocation::Explicit { args, .. } | Invocation::Implicit { args } => args,
        }
    }
}

impl std::fmt::Debug for Invocation<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args: Vec<String> = self.args().iter().map(|a| a.to_string()).collect();
        match self {
            Invocation::Explicit { level, .. } => f
                .debug_struct("Explicit")
                .field("level", level)
                .field("args", &args)
                .finish(),
            Invocation::Implicit { .. } => f.debug_struct("Implicit").field("args", &args).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(invocation: &Invocation<'_, '_>) -> Vec<String> {
        invocation.args().iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_leading_level_name_is_consumed() {
        let args: [&dyn Display; 2] = [&"info", &"message"];
        let invocation = Invocation::from_args(&args);
        assert!(matches!(invocation, Invocation::Explicit { level: Level::Info, .. }));
        assert_eq!(rendered(&invocation), vec!["message"]);
    }

    #[test]
    fn test_plain_message_is_implicit() {
        let args: [&dyn Display; 2] = [&"message", &"info"];
        let invocation = Invocation::from_args(&args);
        assert!(matches!(invocation, Invocation::Implicit { .. }));
        assert_eq!(invocation.level(), Level::Debug);
        assert_eq!(rendered(&invocation), vec!["message", "info"]);
    }

    #[test]
    fn test_level_name_match_is_exact() {
        let args: [&dyn Display; 2] = [&"WARN", &"message"];
        let invocation = Invocation::from_args(&args);
        assert_eq!(invocation.level(), Level::Debug);
        assert_eq!(invocation.args().len(), 2);
    }

    #[test]
    fn test_lone_level_name_is_the_message() {
        let args: [&dyn Display; 1] = [&"error"];
        let invocation = Invocation::from_args(&args);
        assert!(matches!(invocation, Invocation::Implicit { .. }));
        assert_eq!(invocation.level(), Level::Debug);
        assert_eq!(rendered(&invocation), vec!["error"]);
    }

    #[test]
    fn test_empty_call() {
        let invocation = Invocation::from_args(&[]);
        assert_eq!(invocation.level(), Level::Debug);
        assert!(invocation.args().is_empty());
    }

    #[test]
    fn test_explicit_constructor() {
        let args: [&dyn Display; 1] = [&"info"];
        // An explicit level is never re-sniffed from the payload.
        let invocation = Invocation::at(Level::Warn, &args);
        assert_eq!(invocation.level(), Level::Warn);
        assert_eq!(rendered(&invocation), vec!["info"]);
    }
}
