//! Picture-in-picture toggle.
//!
//! The PiP API is only callable with page privileges, so the toggle is a
//! script handed to the [`PrivilegedActionBridge`]. The script reports its
//! own failures to the page console.

use crate::page::PrivilegedActionBridge;

/// Page-context script that enters or leaves picture-in-picture on the
/// first video.
pub const TOGGLE_PIP_SCRIPT: &str = r#"(function() {
  var v = document.querySelector("video");
  if (!v) { console.error("[PiP] no video found"); return; }
  if (document.pictureInPictureElement) {
    document.exitPictureInPicture().catch(function(e) { console.error("[PiP] exit error:", e); });
  } else {
    v.requestPictureInPicture().catch(function(e) { console.error("[PiP] enter error:", e); });
  }
})()"#;

pub fn toggle_picture_in_picture<B: PrivilegedActionBridge + ?Sized>(bridge: &mut B) {
    log::debug!("Injecting picture-in-picture toggle");
    bridge.inject(TOGGLE_PIP_SCRIPT);
}
