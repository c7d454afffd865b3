const COMMANDS: &[&str] = &["check_send_intent_received", "submit_shared_content", "reset"];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
