//! Tests for implementation resolution and its diagnostics.

use iterkit::resolver::{
    Decision, IMPLEMENTATION_VARIABLE, Preference, Resolution, ResolutionWarning, get_preference,
    native_available, resolve,
};
use iterkit::{Toolkit, resolve_implementation};
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};

// =============================================================================
// Log capture
// =============================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(action: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    captured.contents()
}

// =============================================================================
// Policy
// =============================================================================

#[rstest]
#[case(Preference::PreferNative, true, Resolution::Native, None)]
#[case(
    Preference::PreferNative,
    false,
    Resolution::Portable,
    Some(ResolutionWarning::FallingBackToPortable)
)]
#[case(Preference::RequireNative, true, Resolution::Native, None)]
#[case(
    Preference::RequireNative,
    false,
    Resolution::Native,
    Some(ResolutionWarning::RequiredNativeUnavailable)
)]
#[case(Preference::PreferPortable, true, Resolution::Portable, None)]
#[case(Preference::PreferPortable, false, Resolution::Portable, None)]
#[case(Preference::RequirePortable, true, Resolution::Portable, None)]
#[case(Preference::RequirePortable, false, Resolution::Portable, None)]
fn test_decision_policy(
    #[case] preference: Preference,
    #[case] available: bool,
    #[case] resolution: Resolution,
    #[case] warning: Option<ResolutionWarning>,
) {
    let decision = Decision::new(preference, available);
    assert_eq!(decision.preference, preference);
    assert_eq!(decision.resolution, resolution);
    assert_eq!(decision.warning, warning);
}

#[rstest]
fn test_require_portable_always_portable() {
    assert_eq!(
        resolve_implementation(Some(Preference::RequirePortable)),
        Ok(Resolution::Portable)
    );
    assert_eq!(resolve(Preference::RequirePortable), Resolution::Portable);
}

#[rstest]
fn test_prefer_native_follows_availability() {
    let expected = if native_available() {
        Resolution::Native
    } else {
        Resolution::Portable
    };
    assert_eq!(resolve(Preference::PreferNative), expected);
}

#[rstest]
fn test_native_available_matches_feature() {
    assert_eq!(native_available(), cfg!(feature = "accelerated"));
}

#[rstest]
fn test_resolution_is_memoized() {
    for preference in Preference::ALL {
        assert_eq!(resolve(preference), resolve(preference));
    }
}

#[rstest]
fn test_repeated_resolution_is_silent() {
    let first = resolve(Preference::RequirePortable);

    let mut second = None;
    let output = capture(|| second = Some(resolve(Preference::RequirePortable)));

    assert_eq!(second, Some(first));
    assert!(output.is_empty(), "{output}");
}

#[rstest]
fn test_decision_report_is_not_silent() {
    let output = capture(|| Decision::new(Preference::RequirePortable, true).report());
    assert!(!output.is_empty());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[rstest]
fn test_require_portable_emits_no_warning() {
    let output = capture(|| Decision::new(Preference::RequirePortable, false).report());

    assert!(!output.contains("WARN"), "{output}");
    assert!(output.contains("implementation resolved"), "{output}");
}

#[rstest]
fn test_fallback_emits_warning() {
    let output = capture(|| Decision::new(Preference::PreferNative, false).report());

    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("falling back to portable implementation"), "{output}");
    assert!(output.contains("PREFER_NATIVE"), "{output}");
}

#[rstest]
fn test_required_native_unavailable_emits_warning() {
    let output = capture(|| Decision::new(Preference::RequireNative, false).report());

    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("required but not available"), "{output}");
}

// =============================================================================
// Preference parsing
// =============================================================================

#[rstest]
#[case("PREFER_NATIVE", Preference::PreferNative)]
#[case("prefer_portable", Preference::PreferPortable)]
#[case("Require_Portable", Preference::RequirePortable)]
#[case("  REQUIRE_NATIVE  ", Preference::RequireNative)]
#[case("", Preference::PreferNative)]
fn test_get_preference_override(#[case] value: &str, #[case] expected: Preference) {
    assert_eq!(get_preference(Some(value)), Ok(expected));
}

#[rstest]
fn test_get_preference_rejects_unknown_value() {
    let error = get_preference(Some("REQUIRE_PYTHON")).unwrap_err();
    let message = error.to_string();

    assert_eq!(error.value, "REQUIRE_PYTHON");
    for preference in Preference::ALL {
        assert!(message.contains(preference.as_str()), "{message}");
    }
}

#[rstest]
fn test_environment_preference_is_consistent() {
    let preference = get_preference(None);
    assert_eq!(get_preference(None), preference);

    match preference {
        Ok(preference) => {
            let resolution = resolve_implementation(None).unwrap();
            assert_eq!(resolution, resolve(preference));
        }
        Err(error) => {
            assert_eq!(error.variable, IMPLEMENTATION_VARIABLE);
            assert!(Toolkit::current().is_err());
        }
    }
}

#[rstest]
fn test_for_preference_portable() {
    let toolkit = Toolkit::for_preference(Preference::PreferPortable).unwrap();
    assert_eq!(toolkit.resolution(), Resolution::Portable);
}
