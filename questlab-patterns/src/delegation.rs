//! Delegation: a [`Pet`] wraps a [`Companion`] and forwards the calls it
//! does not change, one explicit method at a time.

/// An animal that follows the player around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion {
    name: String,
    species: String,
    loyalty: u8,
}

impl Companion {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            loyalty: 50,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn loyalty(&self) -> u8 {
        self.loyalty
    }

    /// Raises loyalty, capped at 100.
    pub fn befriend(&mut self, amount: u8) {
        self.loyalty = self.loyalty.saturating_add(amount).min(100);
    }

    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} the {} (loyalty {})", self.name, self.species, self.loyalty)
    }
}

/// A trained companion that knows tricks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    companion: Companion,
    tricks: Vec<String>,
}

impl Pet {
    pub fn new(companion: Companion) -> Self {
        Self {
            companion,
            tricks: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.companion.name()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.companion.rename(name);
    }

    #[must_use]
    pub fn loyalty(&self) -> u8 {
        self.companion.loyalty()
    }

    /// Treats make a pet twice as loyal as plain attention does.
    pub fn treat(&mut self, amount: u8) {
        self.companion.befriend(amount.saturating_mul(2));
    }

    pub fn learn(&mut self, trick: impl Into<String>) {
        let trick = trick.into();
        if !self.tricks.contains(&trick) {
            self.tricks.push(trick);
        }
    }

    /// Performs a known trick, or `None` if the pet never learned it.
    #[must_use]
    pub fn perform(&self, trick: &str) -> Option<String> {
        self.tricks
            .iter()
            .any(|t| t == trick)
            .then(|| format!("{} performs {trick}!", self.name()))
    }

    /// Extends the companion's description with the trick list.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.tricks.is_empty() {
            self.companion.describe()
        } else {
            format!(
                "{}, knows: {}",
                self.companion.describe(),
                self.tricks.join(", ")
            )
        }
    }

    #[must_use]
    pub fn companion(&self) -> &Companion {
        &self.companion
    }

    pub fn into_companion(self) -> Companion {
        self.companion
    }
}
