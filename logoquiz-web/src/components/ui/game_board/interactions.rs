use yew::prelude::*;

/// How long the wrong-guess flash stays up before the deferred clear.
pub(super) const WRONG_FLASH_MS: i32 = 1500;

/// Schedule the deferred clear for the wrong-guess flash.
///
/// The callback re-checks the live session before applying its effect, so a
/// timer outliving its round is a no-op.
#[hook]
pub(super) fn use_flash_timer(active: bool, on_clear: Callback<()>) {
    use_effect_with(active, move |flash| {
        #[cfg(target_arch = "wasm32")]
        if *flash {
            let on_clear = on_clear.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = crate::dom::sleep_ms(WRONG_FLASH_MS).await;
                on_clear.emit(());
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (flash, &on_clear, WRONG_FLASH_MS);
        }
    });
}

/// Keep the guess input focused while the round accepts guesses: on round
/// changes, on each reveal stage, and after a wrong guess cleared the field.
#[hook]
pub(super) fn use_refocus(input_ref: NodeRef, round_key: (AttrValue, u8, bool)) {
    use_effect_with(round_key, move |key| {
        #[cfg(target_arch = "wasm32")]
        {
            let (_, _, round_over) = key;
            if !*round_over
                && let Some(input) = input_ref.cast::<web_sys::HtmlElement>()
            {
                let _ = input.focus();
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&input_ref, key);
        }
    });
}
