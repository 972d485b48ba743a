//! Modifier-key routing for the legalize trigger.

/// Modifier keys held when the trigger fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalizeCommand {
    Active,
    CurrentGroup,
    AllGroups,
}

impl LegalizeCommand {
    /// Control selects the current box, control+shift every box. Shift alone does nothing extra.
    pub fn from_modifiers(mods: Modifiers) -> Self {
        match (mods.control, mods.shift) {
            (false, _) => LegalizeCommand::Active,
            (true, false) => LegalizeCommand::CurrentGroup,
            (true, true) => LegalizeCommand::AllGroups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_table() {
        let cases = [
            (false, false, LegalizeCommand::Active),
            (false, true, LegalizeCommand::Active),
            (true, false, LegalizeCommand::CurrentGroup),
            (true, true, LegalizeCommand::AllGroups),
        ];
        for (control, shift, expected) in cases {
            let got = LegalizeCommand::from_modifiers(Modifiers { control, shift });
            assert_eq!(got, expected, "control={control} shift={shift}");
        }
    }
}
