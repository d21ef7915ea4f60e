//! JavaScript snippets evaluated in the scheduler tab.
//!
//! Every id is embedded as a JSON string literal so quotes and backslashes
//! cannot break out of the expression.

use crate::location::Location;

const LOADING_MASK_CLASS: &str = "spinner-mask";
const SUMMARY_CLASS: &str = "nextAppointment";
const DATE_CLASS: &str = "date";
const PANEL_TRIGGER_PREFIX: &str = "centerDetails";
const POPOVER_PREFIX: &str = "popover";
const POPOVER_CLOSE_SUFFIX: &str = "BtnClosePopover";
const CHOOSE_DATE_BUTTON: &str = "btnChooseDate";

fn literal(s: &str) -> String {
	serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn is_loading() -> String {
	format!("document.getElementsByClassName({}).length > 0", literal(LOADING_MASK_CLASS))
}

/// First element of `class`, as `innerHTML` or `innerText`, else `null`.
fn first_of_class(class: &str, property: &str) -> String {
	format!(
		r#"(() => {{
	const el = document.getElementsByClassName({class})[0];
	return el ? el.{property} : null;
}})()"#,
		class = literal(class),
		property = property
	)
}

pub fn availability_summary() -> String {
	first_of_class(SUMMARY_CLASS, "innerHTML")
}

pub fn next_appointment_date() -> String {
	first_of_class(DATE_CLASS, "innerText")
}

/// Clicks the element with `id`, throwing if it is missing.
pub fn click_by_id(id: &str) -> String {
	format!(
		r#"(() => {{
	const el = document.getElementById({id});
	if (!el) {{
		throw new Error("element #" + {id} + " not found");
	}}
	el.click();
	return true;
}})()"#,
		id = literal(id)
	)
}

pub fn panel_trigger_id(location: Location) -> String {
	format!("{PANEL_TRIGGER_PREFIX}{}", location.center_id())
}

pub fn popover_id(location: Location) -> String {
	format!("{POPOVER_PREFIX}{}", location.center_id())
}

pub fn popover_close_id(location: Location) -> String {
	format!("{}{POPOVER_CLOSE_SUFFIX}", popover_id(location))
}

pub fn confirm_date_id() -> &'static str {
	CHOOSE_DATE_BUTTON
}

/// Clicks the schedule button in the popover's action row.
///
/// The button has no id of its own; looking it up globally lands on the first
/// center's popover, so the search is scoped to this location's popover.
pub fn choose_location(location: Location) -> String {
	format!(
		r#"(() => {{
	const popover = document.getElementById({popover});
	if (!popover) {{
		throw new Error("popover " + {popover} + " not found");
	}}
	const row = popover.querySelector("div.actionRow");
	const button = row && row.firstElementChild;
	if (!button) {{
		throw new Error("schedule button not found in " + {popover});
	}}
	button.click();
	return true;
}})()"#,
		popover = literal(&popover_id(location))
	)
}

/// Plays the alert tone once; rejected playback (autoplay policy) is swallowed.
pub fn play_tone(url: &str) -> String {
	format!(
		r#"(() => {{
	const audio = new Audio({url});
	audio.play().catch(() => {{}});
	return true;
}})()"#,
		url = literal(url)
	)
}
