use clap::Args;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// The shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

impl CompletionsCommand {
    /// Print completions for `C` to stdout
    pub fn generate_completions<C: clap::CommandFactory>(&self) {
        self.write_completions::<C>(&mut io::stdout());
    }

    /// Completion script for `C`, named after its binary
    pub fn write_completions<C: clap::CommandFactory>(&self, out: &mut dyn Write) {
        let mut cmd = C::command();
        let bin_name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, bin_name, out);
    }

    pub fn shell(&self) -> Shell {
        self.shell
    }
}
