//! # relax-ext 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/relax.rs` 定义的参数
//! - 使用 `vasp/relax.rs`, `client/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::parse_host;
use crate::cli::relax::RelaxArgs;
use crate::client;
use crate::error::Result;
use crate::utils::{output, progress};
use crate::vasp::get_largest_relax_extension;

/// 执行 relax-ext 命令
pub fn execute(args: RelaxArgs) -> Result<()> {
    let host = parse_host(args.remote.host.as_deref())?;
    let client = client::auto_client(".", host.as_ref(), args.remote.ssh_config());

    let spinner = progress::create_spinner(&format!("Listing {}", args.dir.display()));
    let result = get_largest_relax_extension(&args.dir, host.as_ref(), client.as_ref());
    spinner.finish_and_clear();

    let ext = result?;
    if ext.is_empty() {
        output::print_info(&format!(
            "No relaxation suffix in '{}'",
            args.dir.display()
        ));
    } else {
        output::print_success(&format!("{}: {}", args.dir.display(), ext));
    }

    Ok(())
}
