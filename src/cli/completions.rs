use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    assetkit completions bash > ~/.bash_completion.d/assetkit\n\n\
                  Generate zsh completions:\n    assetkit completions zsh > ~/.zfunc/_assetkit\n\n\
                  Generate fish completions:\n    assetkit completions fish > ~/.config/fish/completions/assetkit.fish\n\n\
                  Generate PowerShell completions:\n    assetkit completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
