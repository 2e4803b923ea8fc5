use anyhow::Result;

fn main() -> Result<()> {
    pointer_tokens_cli::main_entry()
}
