//! The single piece of cross-page state: the player's dice count.
//!
//! Carried in a client-held cookie rather than any server-side store, so
//! concurrent players never touch shared mutable state. A missing,
//! garbled, or out-of-cap cookie reads as 1 die, matching the flow's
//! default. The cookie is client-controlled input: it gets the same cap
//! as the dice-count form, so forged values never reach the math.

use tower_cookies::{Cookie, Cookies};

use crate::constants::{DICE_COUNT_COOKIE, MAX_DICE_COUNT};

/// Read the dice count from the session cookie, defaulting to 1.
pub fn dice_count(cookies: &Cookies) -> u32 {
    cookies
        .get(DICE_COUNT_COOKIE)
        .and_then(|c| c.value().parse().ok())
        .filter(|n| (1..=MAX_DICE_COUNT).contains(n))
        .unwrap_or(1)
}

/// Store the dice count for the rest of the flow.
pub fn set_dice_count(cookies: &Cookies, dice_count: u32) {
    let mut cookie = Cookie::new(DICE_COUNT_COOKIE, dice_count.to_string());
    cookie.set_path("/");
    cookies.add(cookie);
}
