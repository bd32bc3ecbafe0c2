//! Parameter records for IMS operations
//!
//! One record per call. Empty lists mean "not given": required lists are
//! rejected by validation, optional lists fall back to the documented
//! default or are left out of the query.

use clap::ValueEnum;
use std::fmt;

macro_rules! ims_action {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
        pub enum $name {
            $(
                #[value(name = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Keyword as sent to IMS
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

ims_action! {
    /// `UPDATE TRAN START(...)` keywords
    TransactionStartAction {
        Q => "Q",
        Schd => "SCHD",
        Suspoutp => "SUSPOUTP",
        Trace => "TRACE",
    }
}

ims_action! {
    /// `UPDATE TRAN STOP(...)` keywords
    TransactionStopAction {
        Q => "Q",
        Schd => "SCHD",
        Trace => "TRACE",
    }
}

ims_action! {
    /// `UPDATE PGM START(...)` keywords
    ProgramStartAction {
        Refresh => "REFRESH",
        Schd => "SCHD",
        Trace => "TRACE",
    }
}

ims_action! {
    /// `UPDATE PGM STOP(...)` keywords
    ProgramStopAction {
        Schd => "SCHD",
        Trace => "TRACE",
    }
}

ims_action! {
    /// Comparison operator for the transaction queue count filter
    QueueCountComparison {
        Lt => "LT",
        Le => "LE",
        Eq => "EQ",
        Ge => "GE",
        Gt => "GT",
        Ne => "NE",
    }
}

/// Start or stop one or more transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTransactionParms {
    /// Transaction names (required, none blank)
    pub names: Vec<String>,
    /// Start keywords; `SCHD` when empty
    pub start: Vec<TransactionStartAction>,
    /// Stop keywords; `SCHD` when empty
    pub stop: Vec<TransactionStopAction>,
    /// IMS members to route the command to; all when empty
    pub route: Vec<String>,
}

impl UpdateTransactionParms {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: Vec<TransactionStartAction>) -> Self {
        self.start = start;
        self
    }

    pub fn with_stop(mut self, stop: Vec<TransactionStopAction>) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_route(mut self, route: Vec<String>) -> Self {
        self.route = route;
        self
    }

    /// Start keywords to send
    pub fn start_actions(&self) -> &[TransactionStartAction] {
        if self.start.is_empty() {
            &[TransactionStartAction::Schd]
        } else {
            &self.start
        }
    }

    /// Stop keywords to send
    pub fn stop_actions(&self) -> &[TransactionStopAction] {
        if self.stop.is_empty() {
            &[TransactionStopAction::Schd]
        } else {
            &self.stop
        }
    }
}

/// Start or stop one or more programs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProgramParms {
    /// Program names (required, none blank)
    pub names: Vec<String>,
    /// Start keywords; `SCHD` when empty
    pub start: Vec<ProgramStartAction>,
    /// Stop keywords; `SCHD` when empty
    pub stop: Vec<ProgramStopAction>,
    /// IMS members to route the command to; all when empty
    pub route: Vec<String>,
}

impl UpdateProgramParms {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: Vec<ProgramStartAction>) -> Self {
        self.start = start;
        self
    }

    pub fn with_stop(mut self, stop: Vec<ProgramStopAction>) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_route(mut self, route: Vec<String>) -> Self {
        self.route = route;
        self
    }

    pub fn start_actions(&self) -> &[ProgramStartAction] {
        if self.start.is_empty() {
            &[ProgramStartAction::Schd]
        } else {
            &self.start
        }
    }

    pub fn stop_actions(&self) -> &[ProgramStopAction] {
        if self.stop.is_empty() {
            &[ProgramStopAction::Schd]
        } else {
            &self.stop
        }
    }
}

/// Query transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTransactionParms {
    /// Names or masks; `*` when empty
    pub names: Vec<String>,
    /// Attributes to show; `ALL` when empty
    pub attributes: Vec<String>,
    /// Only transactions in one of these states
    pub status: Vec<String>,
    /// Only transactions of this class
    pub class: Option<u16>,
    /// Queue count filter, e.g. `(Gt, 10)`
    pub queue_count: Option<(QueueCountComparison, u32)>,
    pub route: Vec<String>,
}

/// Query programs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryProgramParms {
    /// Names or masks; `*` when empty
    pub names: Vec<String>,
    /// Attributes to show; `ALL` when empty
    pub attributes: Vec<String>,
    /// Only programs in one of these states
    pub status: Vec<String>,
    pub route: Vec<String>,
}

/// Query dependent regions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRegionParms {
    /// Include DC (communication) status
    pub dc: bool,
    /// Include region status; implied when `dc` is not set
    pub region: bool,
    pub route: Vec<String>,
}

/// Start a dependent region from a JCL member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartRegionParms {
    /// PROCLIB member holding the region JCL (required)
    pub member_name: Option<String>,
    /// Override the job name in the member
    pub job_name: Option<String>,
    /// Start the region on the local IMS only
    pub local: Option<bool>,
    pub route: Vec<String>,
}

/// Stop dependent regions, by region number or by job name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopRegionParms {
    /// Region numbers to stop
    pub reg_num: Vec<u32>,
    /// Job name of the region to stop
    pub job_name: Option<String>,
    /// Abnormally terminate with a dump
    pub abdump: bool,
    /// Cancel a region that did not stop after a normal or abdump stop
    pub cancel: bool,
    /// Stop the message region only if it is processing this transaction
    pub transaction: Option<String>,
    pub route: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_defaults_to_schd() {
        let parms = UpdateTransactionParms::new(["TRAN1"]);
        assert_eq!(parms.start_actions(), &[TransactionStartAction::Schd]);
        assert_eq!(parms.stop_actions(), &[TransactionStopAction::Schd]);
    }

    #[test]
    fn test_explicit_actions_override_default() {
        let parms = UpdateProgramParms::new(["PGM1"])
            .with_start(vec![ProgramStartAction::Refresh, ProgramStartAction::Trace]);
        assert_eq!(
            parms.start_actions(),
            &[ProgramStartAction::Refresh, ProgramStartAction::Trace]
        );
        assert_eq!(parms.stop_actions(), &[ProgramStopAction::Schd]);
    }

    #[test]
    fn test_action_keywords() {
        assert_eq!(TransactionStartAction::Suspoutp.as_str(), "SUSPOUTP");
        assert_eq!(ProgramStartAction::Refresh.to_string(), "REFRESH");
        assert_eq!(QueueCountComparison::Ge.as_str(), "GE");
    }

    #[test]
    fn test_parms_compare_by_value() {
        let a = UpdateTransactionParms::new(["A"]).with_route(vec!["IMS1".into()]);
        let b = UpdateTransactionParms::new(vec!["A".to_string()]).with_route(vec!["IMS1".into()]);
        assert_eq!(a, b);
    }
}
