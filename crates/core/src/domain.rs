// crates/core/src/domain.rs

//! The two planning problem families and their per-domain constants.

/// Closed set of planning problem families. Selected once per scenario and
/// used to pick the goal grammar, action vocabulary, and prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Blocks,
    Objects,
}

impl Domain {
    /// Classify a scenario or problem text by its surface wording.
    ///
    /// "set of blocks" wins over "set of objects"; a bare "block" mention
    /// still counts as blocks; everything else falls back to objects.
    pub fn of_text(text: &str) -> Domain {
        let lower = text.to_lowercase();
        if lower.contains("set of blocks") {
            return Domain::Blocks;
        }
        if lower.contains("set of objects") {
            return Domain::Objects;
        }
        if lower.contains("block") {
            Domain::Blocks
        } else {
            Domain::Objects
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// The constants bundle for this domain.
    pub fn profile(self) -> &'static DomainProfile {
        match self {
            Domain::Blocks => &BLOCKS_PROFILE,
            Domain::Objects => &OBJECTS_PROFILE,
        }
    }
}

/// Signature of one action in a domain's vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct ActionSig {
    pub name: &'static str,
    /// Number of arguments the action takes (excluding the action name).
    pub args: usize,
}

/// Everything that varies between the two domains, collected in one record
/// so the rest of the code never branches on strings.
#[derive(Debug)]
pub struct DomainProfile {
    pub name: &'static str,
    /// Role instruction sent alongside every prompt for this domain.
    pub system: &'static str,
    pub actions: &'static [ActionSig],
    /// Output token cap for the generation call.
    pub max_new_tokens: u32,
}

impl DomainProfile {
    /// Look up an action signature by name.
    pub fn action(&self, name: &str) -> Option<&ActionSig> {
        self.actions.iter().find(|sig| sig.name == name)
    }
}

static BLOCKS_PROFILE: DomainProfile = DomainProfile {
    name: "blocks",
    system: "You are an expert planner in the BLOCKS domain. \
             Output ONLY the final plan as parenthesized action lines. \
             No explanations, no markdown, no extra text.",
    actions: &[
        ActionSig { name: "unmount_node", args: 2 },
        ActionSig { name: "mount_node", args: 2 },
        ActionSig { name: "engage_payload", args: 1 },
        ActionSig { name: "release_payload", args: 1 },
    ],
    max_new_tokens: 192,
};

static OBJECTS_PROFILE: DomainProfile = DomainProfile {
    name: "objects",
    system: "You are an expert planner in the OBJECTS domain. \
             Output ONLY the final plan as parenthesized action lines. \
             No explanations, no markdown, no extra text.",
    actions: &[
        ActionSig { name: "attack", args: 1 },
        ActionSig { name: "succumb", args: 1 },
        ActionSig { name: "feast", args: 2 },
        ActionSig { name: "overcome", args: 2 },
    ],
    max_new_tokens: 192,
};
