use crate::address::ObjectId;
use serde_json::Value;
use std::fmt;

/// Fully qualified Move function: `<package>::<module>::<function>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTarget {
    package: ObjectId,
    module: String,
    function: String,
}

impl MoveTarget {
    /// `<package>::<module>::<function>`
    pub fn new(package: ObjectId, module: &str, function: &str) -> Self {
        MoveTarget {
            package,
            module: module.to_string(),
            function: function.to_string(),
        }
    }

    /// Id of the published package
    pub fn package(&self) -> &ObjectId {
        &self.package
    }

    /// Module name inside the package
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Entry function name
    pub fn function(&self) -> &str {
        &self.function
    }
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

/// Pure (non-object) call argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PureArg {
    /// Move `std::string::String`
    String(String),
}

impl PureArg {
    /// JSON form understood by the node's transaction builder
    pub fn to_json(&self) -> Value {
        match self {
            PureArg::String(s) => Value::String(s.clone()),
        }
    }
}

impl From<&str> for PureArg {
    fn from(s: &str) -> Self {
        PureArg::String(s.to_string())
    }
}

impl From<String> for PureArg {
    fn from(s: String) -> Self {
        PureArg::String(s)
    }
}

/// One Move call instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
    target: MoveTarget,
    arguments: Vec<PureArg>,
}

impl MoveCall {
    /// Call `target` with `arguments`, in order
    pub fn new(target: MoveTarget, arguments: Vec<PureArg>) -> Self {
        MoveCall { target, arguments }
    }

    /// Function being called
    pub fn target(&self) -> &MoveTarget {
        &self.target
    }

    /// Positional arguments
    pub fn arguments(&self) -> &[PureArg] {
        &self.arguments
    }
}

/// Instruction inside a [`Transaction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Call a Move entry function
    MoveCall(MoveCall),
}

/// Unsigned transaction as handed to a [`crate::ledger_client::LedgerClient`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    commands: Vec<Command>,
    gas_budget: Option<u64>,
}

impl Transaction {
    /// Empty transaction without a gas budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a Move call
    pub fn with_move_call(mut self, call: MoveCall) -> Self {
        self.commands.push(Command::MoveCall(call));
        self
    }

    /// Budget in MIST. Ledger clients fall back to their own default when unset.
    pub fn with_gas_budget(mut self, gas_budget: u64) -> Self {
        self.gas_budget = Some(gas_budget);
        self
    }

    /// Commands in execution order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Budget in MIST, if one was set
    pub fn gas_budget(&self) -> Option<u64> {
        self.gas_budget
    }

    /// The call, if this transaction is exactly one Move call
    pub fn single_move_call(&self) -> Option<&MoveCall> {
        match self.commands.as_slice() {
            [Command::MoveCall(call)] => Some(call),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> ObjectId {
        "0xbeef".parse().unwrap()
    }

    #[test]
    fn target_displays_fully_qualified() {
        let target = MoveTarget::new(package(), "nft_minter", "mint_nft");
        assert_eq!(
            target.to_string(),
            "0x000000000000000000000000000000000000000000000000000000000000beef::nft_minter::mint_nft"
        );
    }

    #[test]
    fn string_args_are_json_strings() {
        assert_eq!(PureArg::from("hi").to_json(), Value::from("hi"));
        assert_eq!(
            PureArg::from(" keeps\nwhitespace ".to_string()).to_json(),
            Value::from(" keeps\nwhitespace ")
        );
    }

    #[test]
    fn single_move_call_only_for_one_command() {
        let call = MoveCall::new(MoveTarget::new(package(), "m", "f"), vec![]);
        let empty = Transaction::new();
        let one = Transaction::new().with_move_call(call.clone());
        let two = one.clone().with_move_call(call.clone());
        assert!(empty.single_move_call().is_none());
        assert_eq!(one.single_move_call(), Some(&call));
        assert!(two.single_move_call().is_none());
    }
}
