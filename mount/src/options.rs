use nix::mount::MsFlags;

const DATA_SEPARATOR: &str = ",";

/// Whether an option sets or clears its flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Set,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRule {
    pub flag: MsFlags,
    pub polarity: Polarity,
}

impl OptionRule {
    const fn set(flag: MsFlags) -> Self {
        Self {
            flag,
            polarity: Polarity::Set,
        }
    }

    const fn clear(flag: MsFlags) -> Self {
        Self {
            flag,
            polarity: Polarity::Clear,
        }
    }

    fn apply(&self, flags: &mut MsFlags) {
        match self.polarity {
            Polarity::Set => flags.insert(self.flag),
            Polarity::Clear => flags.remove(self.flag),
        }
    }
}

/// Outcome of looking up a single option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The token maps onto mount flags.
    Flag(OptionRule),
    /// The token is known but has no effect on the flags (e.g. `defaults`).
    NoOp,
    /// The token is filesystem-specific data.
    Unknown,
}

enum Entry {
    Rule(OptionRule),
    NoOp,
}

// Sorted by token for binary search.
static OPTION_TABLE: &[(&str, Entry)] = &[
    ("async", Entry::Rule(OptionRule::clear(MsFlags::MS_SYNCHRONOUS))),
    ("atime", Entry::Rule(OptionRule::clear(MsFlags::MS_NOATIME))),
    ("bind", Entry::Rule(OptionRule::set(MsFlags::MS_BIND))),
    ("defaults", Entry::NoOp),
    ("dev", Entry::Rule(OptionRule::clear(MsFlags::MS_NODEV))),
    ("diratime", Entry::Rule(OptionRule::clear(MsFlags::MS_NODIRATIME))),
    ("dirsync", Entry::Rule(OptionRule::set(MsFlags::MS_DIRSYNC))),
    ("exec", Entry::Rule(OptionRule::clear(MsFlags::MS_NOEXEC))),
    ("mand", Entry::Rule(OptionRule::set(MsFlags::MS_MANDLOCK))),
    ("noatime", Entry::Rule(OptionRule::set(MsFlags::MS_NOATIME))),
    ("nodev", Entry::Rule(OptionRule::set(MsFlags::MS_NODEV))),
    ("nodiratime", Entry::Rule(OptionRule::set(MsFlags::MS_NODIRATIME))),
    ("noexec", Entry::Rule(OptionRule::set(MsFlags::MS_NOEXEC))),
    ("nomand", Entry::Rule(OptionRule::clear(MsFlags::MS_MANDLOCK))),
    ("norelatime", Entry::Rule(OptionRule::clear(MsFlags::MS_RELATIME))),
    ("nostrictatime", Entry::Rule(OptionRule::clear(MsFlags::MS_STRICTATIME))),
    ("nosuid", Entry::Rule(OptionRule::set(MsFlags::MS_NOSUID))),
    (
        "rbind",
        Entry::Rule(OptionRule::set(MsFlags::MS_BIND.union(MsFlags::MS_REC))),
    ),
    ("relatime", Entry::Rule(OptionRule::set(MsFlags::MS_RELATIME))),
    ("remount", Entry::Rule(OptionRule::set(MsFlags::MS_REMOUNT))),
    ("ro", Entry::Rule(OptionRule::set(MsFlags::MS_RDONLY))),
    ("rw", Entry::Rule(OptionRule::clear(MsFlags::MS_RDONLY))),
    ("strictatime", Entry::Rule(OptionRule::set(MsFlags::MS_STRICTATIME))),
    ("suid", Entry::Rule(OptionRule::clear(MsFlags::MS_NOSUID))),
    ("sync", Entry::Rule(OptionRule::set(MsFlags::MS_SYNCHRONOUS))),
];

/// Look up a single fstab-style option. Matching is exact; no case or
/// whitespace normalization is done here.
pub fn lookup(token: &str) -> Lookup {
    match OPTION_TABLE.binary_search_by(|(key, _)| (*key).cmp(token)) {
        Ok(idx) => match &OPTION_TABLE[idx].1 {
            Entry::Rule(rule) => Lookup::Flag(*rule),
            Entry::NoOp => Lookup::NoOp,
        },
        Err(_) => Lookup::Unknown,
    }
}

/// Mount flags and filesystem-specific data derived from a list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedOptions {
    pub flags: MsFlags,
    pub data: String,
}

impl TranslatedOptions {
    /// Raw flag bits as passed to `mount(2)`.
    pub fn bits(&self) -> u64 {
        self.flags.bits() as u64
    }

    /// Filesystem-specific data, or `None` when there is nothing to pass.
    pub fn data(&self) -> Option<&str> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.as_str())
        }
    }
}

/// Fold fstab-style options into mount flags plus residual data.
///
/// Options are applied left to right, so a later option overrides an
/// earlier one touching the same flag (`noatime,atime` ends with atime
/// updates enabled). Anything not in the option table is kept, in order and
/// without deduplication, as filesystem-specific data joined with `,`.
pub fn translate<I, S>(options: I) -> TranslatedOptions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut flags = MsFlags::empty();
    let mut data: Vec<String> = Vec::new();

    for option in options {
        let option = option.as_ref();
        match lookup(option) {
            Lookup::Flag(rule) => rule.apply(&mut flags),
            Lookup::NoOp => {}
            Lookup::Unknown => data.push(option.to_string()),
        }
    }

    TranslatedOptions {
        flags,
        data: data.join(DATA_SEPARATOR),
    }
}

/// Split a comma-separated option string into tokens, skipping empty
/// segments.
pub fn split_options(options: &str) -> Vec<String> {
    options
        .split(DATA_SEPARATOR)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
