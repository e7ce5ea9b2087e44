use crate::utils::format_flags;
use ross_mount::split_options;

pub fn translate(args: &[String]) {
    let options: Vec<String> = args.iter().flat_map(|a| split_options(a)).collect();
    let translated = ross_mount::translate(&options);

    println!("Flags: {:#x} ({})", translated.bits(), format_flags(translated.flags));
    println!("Data:  {}", translated.data);
}
