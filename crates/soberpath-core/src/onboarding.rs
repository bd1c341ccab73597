//! First-run onboarding flow and the shallow app-wide state it fills in.
//!
//! ```text
//! Welcome -> AddictionType -> QuitDate -> SupportStyle -> Done
//! ```
//!
//! Each answer step refuses to advance without its value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddictionType {
    Alcohol,
    Smoking,
    Drugs,
    Gambling,
    SocialMedia,
    Gaming,
    Shopping,
    Other,
}

impl AddictionType {
    pub const ALL: [AddictionType; 8] = [
        AddictionType::Alcohol,
        AddictionType::Smoking,
        AddictionType::Drugs,
        AddictionType::Gambling,
        AddictionType::SocialMedia,
        AddictionType::Gaming,
        AddictionType::Shopping,
        AddictionType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddictionType::Alcohol => "Alcohol",
            AddictionType::Smoking => "Smoking",
            AddictionType::Drugs => "Drugs",
            AddictionType::Gambling => "Gambling",
            AddictionType::SocialMedia => "Social Media",
            AddictionType::Gaming => "Gaming",
            AddictionType::Shopping => "Shopping",
            AddictionType::Other => "Other",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            AddictionType::Alcohol => "alcohol",
            AddictionType::Smoking => "smoking",
            AddictionType::Drugs => "drugs",
            AddictionType::Gambling => "gambling",
            AddictionType::SocialMedia => "social_media",
            AddictionType::Gaming => "gaming",
            AddictionType::Shopping => "shopping",
            AddictionType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportStyle {
    Gentle,
    Structured,
    ToughLove,
    Mindful,
}

impl SupportStyle {
    pub const ALL: [SupportStyle; 4] = [
        SupportStyle::Gentle,
        SupportStyle::Structured,
        SupportStyle::ToughLove,
        SupportStyle::Mindful,
    ];

    fn key(&self) -> &'static str {
        match self {
            SupportStyle::Gentle => "gentle",
            SupportStyle::Structured => "structured",
            SupportStyle::ToughLove => "tough_love",
            SupportStyle::Mindful => "mindful",
        }
    }
}

snake_key_text!(AddictionType, "addiction_type");
snake_key_text!(SupportStyle, "support_style");

/// Answers gathered during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingData {
    pub addiction_type: Option<AddictionType>,
    pub quit_date: Option<NaiveDate>,
    pub support_style: Option<SupportStyle>,
}

/// The app-wide flags every screen may read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub has_completed_onboarding: bool,
    pub is_authenticated: bool,
    pub onboarding: OnboardingData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    AddictionType,
    QuitDate,
    SupportStyle,
    Done,
}

#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    data: OnboardingData,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            data: OnboardingData::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn data(&self) -> &OnboardingData {
        &self.data
    }

    pub fn is_done(&self) -> bool {
        self.step == OnboardingStep::Done
    }

    /// Leave the welcome screen.
    pub fn begin(&mut self) {
        if self.step == OnboardingStep::Welcome {
            self.step = OnboardingStep::AddictionType;
        }
    }

    /// # Errors
    ///
    /// `MissingField` when nothing is selected.
    pub fn choose_addiction(&mut self, choice: Option<AddictionType>) -> Result<(), ValidationError> {
        self.expect_step(OnboardingStep::AddictionType)?;
        self.data.addiction_type = Some(choice.ok_or(ValidationError::MissingField("addiction_type"))?);
        self.step = OnboardingStep::QuitDate;
        Ok(())
    }

    /// # Errors
    ///
    /// `InvalidValue` when `quit_date` lies after `today`.
    pub fn set_quit_date(&mut self, quit_date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
        self.expect_step(OnboardingStep::QuitDate)?;
        if quit_date > today {
            return Err(ValidationError::InvalidValue {
                field: "quit_date".into(),
                message: format!("{quit_date} is in the future"),
            });
        }
        self.data.quit_date = Some(quit_date);
        self.step = OnboardingStep::SupportStyle;
        Ok(())
    }

    /// Final step; on success the flow is done.
    ///
    /// # Errors
    ///
    /// `MissingField` when nothing is selected.
    pub fn choose_support_style(&mut self, choice: Option<SupportStyle>) -> Result<(), ValidationError> {
        self.expect_step(OnboardingStep::SupportStyle)?;
        self.data.support_style = Some(choice.ok_or(ValidationError::MissingField("support_style"))?);
        self.step = OnboardingStep::Done;
        Ok(())
    }

    /// Copy the answers into `state` and mark onboarding complete.
    ///
    /// # Errors
    ///
    /// `MissingField("onboarding")` if the flow has not reached `Done`.
    pub fn finish(self, state: &mut AppState) -> Result<(), ValidationError> {
        if !self.is_done() {
            return Err(ValidationError::MissingField("onboarding"));
        }
        state.onboarding = self.data;
        state.has_completed_onboarding = true;
        tracing::info!("onboarding completed");
        Ok(())
    }

    fn expect_step(&self, wanted: OnboardingStep) -> Result<(), ValidationError> {
        if self.step == wanted {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue {
                field: "step".into(),
                message: format!("expected {wanted:?}, flow is at {:?}", self.step),
            })
        }
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}
