//! Compiler builtin metadata.
//!
//! Builtins (`@name(...)`) have no parsed declaration, so their parameters are
//! described by a static table. Each argument descriptor has the form
//! `"[qualifiers ]name: type"`. A descriptor of `"..."` marks a variadic tail.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Static description of one builtin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinDescriptor {
    /// Name including the leading `@`.
    pub name: &'static str,
    pub arguments: &'static [&'static str],
}

/// Builtins whose arguments are obvious enough that parameter hints are
/// never shown for them.
pub const EXCLUDED_BUILTINS: &[&str] = &[
    "@import",
    "@embedFile",
    "@cImport",
    "@cInclude",
    "@compileError",
    "@compileLog",
    "@panic",
    "@TypeOf",
    "@This",
    "@setEvalBranchQuota",
    "@setRuntimeSafety",
];

/// Whether hints are suppressed for the builtin `name`.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_BUILTINS.iter().any(|&excluded| excluded == name)
}

/// Name-indexed view over a set of descriptors.
#[derive(Debug)]
pub struct BuiltinTable {
    index: FxHashMap<&'static str, &'static BuiltinDescriptor>,
}

static STANDARD: LazyLock<BuiltinTable> = LazyLock::new(|| BuiltinTable::new(STANDARD_BUILTINS));

impl BuiltinTable {
    /// Index `descriptors` by name. Later duplicates shadow earlier ones.
    pub fn new(descriptors: &'static [BuiltinDescriptor]) -> Self {
        Self {
            index: descriptors.iter().map(|d| (d.name, d)).collect(),
        }
    }

    /// The builtins of the language.
    pub fn standard() -> &'static BuiltinTable {
        &STANDARD
    }

    /// Exact-name lookup, `@` included.
    pub fn get(&self, name: &str) -> Option<&'static BuiltinDescriptor> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// A parsed argument descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuiltinArgument<'a> {
    pub label: &'a str,
    pub type_text: &'a str,
    pub is_noalias: bool,
    pub is_comptime: bool,
}

impl<'a> BuiltinArgument<'a> {
    /// Split `"[qualifiers ]label[: type]"` at the first colon.
    pub fn parse(descriptor: &'a str) -> Self {
        let (head, type_text) = match descriptor.split_once(':') {
            Some((head, tail)) => (head, tail.trim()),
            None => (descriptor, ""),
        };

        let mut argument = BuiltinArgument {
            type_text,
            ..Self::default()
        };
        let mut words = head.split_whitespace().peekable();
        while let Some(word) = words.next() {
            if words.peek().is_none() {
                argument.label = word;
                break;
            }
            match word {
                "noalias" => argument.is_noalias = true,
                "comptime" => argument.is_comptime = true,
                _ => {}
            }
        }
        argument
    }

    /// An empty label or `...`: no further arguments can be described.
    pub fn ends_arguments(&self) -> bool {
        self.label.is_empty() || self.label == "..."
    }
}

macro_rules! builtins {
    ($($name:literal => [$($arg:literal),* $(,)?]),* $(,)?) => {
        &[$(BuiltinDescriptor { name: $name, arguments: &[$($arg),*] }),*]
    };
}

/// Descriptors for the language's builtins.
pub static STANDARD_BUILTINS: &[BuiltinDescriptor] = builtins![
    "@addrSpaceCast" => ["ptr: anytype"],
    "@addWithOverflow" => ["a: anytype", "b: anytype"],
    "@alignCast" => ["ptr: anytype"],
    "@alignOf" => ["comptime T: type"],
    "@as" => ["comptime T: type", "expression"],
    "@atomicLoad" => ["comptime T: type", "ptr: *const T", "comptime ordering: AtomicOrder"],
    "@atomicRmw" => [
        "comptime T: type",
        "ptr: *T",
        "comptime op: AtomicRmwOp",
        "operand: T",
        "comptime ordering: AtomicOrder",
    ],
    "@atomicStore" => ["comptime T: type", "ptr: *T", "value: T", "comptime ordering: AtomicOrder"],
    "@bitCast" => ["value: anytype"],
    "@bitOffsetOf" => ["comptime T: type", "comptime field_name: []const u8"],
    "@bitReverse" => ["integer: anytype"],
    "@bitSizeOf" => ["comptime T: type"],
    "@branchHint" => ["hint: BranchHint"],
    "@breakpoint" => [],
    "@byteSwap" => ["operand: anytype"],
    "@call" => ["modifier: std.builtin.CallModifier", "function: anytype", "args: anytype"],
    "@cDefine" => ["comptime name: []const u8", "value"],
    "@cImport" => ["expression"],
    "@cInclude" => ["comptime path: []const u8"],
    "@clz" => ["operand: anytype"],
    "@cmpxchgStrong" => [
        "comptime T: type",
        "ptr: *T",
        "expected_value: T",
        "new_value: T",
        "success_order: AtomicOrder",
        "fail_order: AtomicOrder",
    ],
    "@cmpxchgWeak" => [
        "comptime T: type",
        "ptr: *T",
        "expected_value: T",
        "new_value: T",
        "success_order: AtomicOrder",
        "fail_order: AtomicOrder",
    ],
    "@compileError" => ["comptime msg: []const u8"],
    "@compileLog" => ["..."],
    "@constCast" => ["value: anytype"],
    "@ctz" => ["operand: anytype"],
    "@cUndef" => ["comptime name: []const u8"],
    "@divExact" => ["numerator: T", "denominator: T"],
    "@divFloor" => ["numerator: T", "denominator: T"],
    "@divTrunc" => ["numerator: T", "denominator: T"],
    "@embedFile" => ["comptime path: []const u8"],
    "@enumFromInt" => ["integer: anytype"],
    "@errorFromInt" => ["value: std.meta.Int(.unsigned, @bitSizeOf(anyerror))"],
    "@errorName" => ["err: anyerror"],
    "@errorReturnTrace" => [],
    "@errorCast" => ["value: anytype"],
    "@export" => ["comptime ptr: *const anyopaque", "comptime options: std.builtin.ExportOptions"],
    "@extern" => ["T: type", "comptime options: std.builtin.ExternOptions"],
    "@field" => ["lhs: anytype", "comptime field_name: []const u8"],
    "@fieldParentPtr" => ["comptime field_name: []const u8", "field_ptr: *T"],
    "@floatCast" => ["value: anytype"],
    "@floatFromInt" => ["int: anytype"],
    "@frameAddress" => [],
    "@hasDecl" => ["comptime Container: type", "comptime name: []const u8"],
    "@hasField" => ["comptime Container: type", "comptime name: []const u8"],
    "@import" => ["comptime path: []const u8"],
    "@inComptime" => [],
    "@intCast" => ["int: anytype"],
    "@intFromBool" => ["value: bool"],
    "@intFromEnum" => ["enum_or_tagged_union: anytype"],
    "@intFromError" => ["err: anytype"],
    "@intFromFloat" => ["float: anytype"],
    "@intFromPtr" => ["value: anytype"],
    "@max" => ["a: T", "b: T", "..."],
    "@memcpy" => ["noalias dest", "noalias source"],
    "@memset" => ["dest", "elem"],
    "@min" => ["a: T", "b: T", "..."],
    "@mod" => ["numerator: T", "denominator: T"],
    "@mulAdd" => ["comptime T: type", "a: T", "b: T", "c: T"],
    "@mulWithOverflow" => ["a: anytype", "b: anytype"],
    "@panic" => ["message: []const u8"],
    "@popCount" => ["operand: anytype"],
    "@prefetch" => ["ptr: anytype", "comptime options: PrefetchOptions"],
    "@ptrCast" => ["value: anytype"],
    "@ptrFromInt" => ["address: usize"],
    "@reduce" => ["comptime op: std.builtin.ReduceOp", "value: anytype"],
    "@rem" => ["numerator: T", "denominator: T"],
    "@returnAddress" => [],
    "@select" => ["comptime T: type", "pred: @Vector(len, bool)", "a: @Vector(len, T)", "b: @Vector(len, T)"],
    "@setEvalBranchQuota" => ["comptime new_quota: u32"],
    "@setFloatMode" => ["comptime mode: FloatMode"],
    "@setRuntimeSafety" => ["comptime safety_on: bool"],
    "@shlExact" => ["value: T", "shift_amt: Log2T"],
    "@shlWithOverflow" => ["a: anytype", "shift_amt: anytype"],
    "@shrExact" => ["value: T", "shift_amt: Log2T"],
    "@shuffle" => [
        "comptime E: type",
        "a: @Vector(a_len, E)",
        "b: @Vector(b_len, E)",
        "comptime mask: @Vector(mask_len, i32)",
    ],
    "@sizeOf" => ["comptime T: type"],
    "@splat" => ["scalar: anytype"],
    "@sqrt" => ["value: anytype"],
    "@src" => [],
    "@subWithOverflow" => ["a: anytype", "b: anytype"],
    "@tagName" => ["value: anytype"],
    "@This" => [],
    "@trap" => [],
    "@truncate" => ["integer: anytype"],
    "@Type" => ["comptime info: std.builtin.Type"],
    "@typeInfo" => ["comptime T: type"],
    "@typeName" => ["T: type"],
    "@TypeOf" => ["..."],
    "@unionInit" => ["comptime Union: type", "comptime active_field_name: []const u8", "init_expr"],
    "@Vector" => ["len: comptime_int", "Element: type"],
    "@volatileCast" => ["value: anytype"],
    "@wasmMemoryGrow" => ["index: u32", "delta: usize"],
    "@wasmMemorySize" => ["index: u32"],
    "@workGroupId" => ["comptime dimension: u32"],
    "@workGroupSize" => ["comptime dimension: u32"],
    "@workItemId" => ["comptime dimension: u32"],
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_names_are_unique_and_prefixed() {
        let mut seen = FxHashSet::default();
        for descriptor in STANDARD_BUILTINS {
            assert!(descriptor.name.starts_with('@'), "{}", descriptor.name);
            assert!(seen.insert(descriptor.name), "duplicate {}", descriptor.name);
        }
        assert_eq!(BuiltinTable::standard().len(), STANDARD_BUILTINS.len());
    }

    #[test]
    fn test_excluded_builtins_are_known() {
        for name in EXCLUDED_BUILTINS {
            assert!(BuiltinTable::standard().get(name).is_some(), "{name}");
            assert!(is_excluded(name));
        }
        assert!(!is_excluded("@intCast"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = BuiltinTable::standard();
        assert!(table.get("@memcpy").is_some());
        assert!(table.get("memcpy").is_none());
        assert!(table.get("@MemCpy").is_none());
    }

    #[test]
    fn test_parse_qualified_descriptor() {
        assert_eq!(
            BuiltinArgument::parse("noalias comptime ptr:  *const T "),
            BuiltinArgument {
                label: "ptr",
                type_text: "*const T",
                is_noalias: true,
                is_comptime: true,
            }
        );
    }

    #[test]
    fn test_parse_without_type() {
        let arg = BuiltinArgument::parse("noalias dest");
        assert_eq!(arg.label, "dest");
        assert_eq!(arg.type_text, "");
        assert!(arg.is_noalias);
        assert!(!arg.is_comptime);
    }

    #[test]
    fn test_parse_splits_at_first_colon() {
        let arg = BuiltinArgument::parse("x: std.meta.Int(.unsigned, 8): extra");
        assert_eq!(arg.label, "x");
        assert_eq!(arg.type_text, "std.meta.Int(.unsigned, 8): extra");
    }

    #[test]
    fn test_variadic_and_empty_labels_end_arguments() {
        assert!(BuiltinArgument::parse("...").ends_arguments());
        assert!(BuiltinArgument::parse("  : type").ends_arguments());
        assert!(!BuiltinArgument::parse("a: T").ends_arguments());
    }
}
