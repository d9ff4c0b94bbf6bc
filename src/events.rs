use crate::detection::with_inputs;

/// `h` toggles a simulated hand, for trying the prompt without a camera.
pub fn wire_hand_toggle_h() {
    crate::dom::add_keydown_listener(|ev| {
        let key = ev.key();
        if (key == "h" || key == "H") && !ev.repeat() {
            let on = with_inputs(|i| {
                i.simulated_hand = !i.simulated_hand;
                i.simulated_hand
            });
            log::info!("simulated hand {}", if on { "on" } else { "off" });
            ev.prevent_default();
        }
    });
}
