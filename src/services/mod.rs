pub mod prompt_relay;
