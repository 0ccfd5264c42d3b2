use serde::{Deserialize, Serialize};

/// A node in the branching-story location graph. The five `Ending*`
/// states are terminal: once reached, choices no longer move the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    VillageEntrance,
    VillageCenter,
    ForestPath,
    MountainTemple,
    AncientLibrary,
    HermitsCave,
    CrystalChamber,
    FinalTrial,
    EndingHarmony,
    EndingCourage,
    EndingWisdom,
    EndingCompassion,
    EndingBalance,
}

impl Location {
    /// True for the five terminal ending states.
    pub fn is_ending(&self) -> bool {
        matches!(
            self,
            Self::EndingHarmony
                | Self::EndingCourage
                | Self::EndingWisdom
                | Self::EndingCompassion
                | Self::EndingBalance
        )
    }
}

/// A player choice in the branching story. Each location accepts only a
/// subset of these; the rest are ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoryChoice {
    HonestPath,
    CompassionatePath,
    CourageousPath,
    LogicalPath,
    HumblePath,
    PerseverantPath,
    RespectfulPath,
    ResponsiblePath,
    FairPath,
    HarmoniousPath,
}
