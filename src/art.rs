use std::sync::atomic::{AtomicUsize, Ordering};

pub const BANNER: &str = r"
    ____                       ____  ____
   / __ \_________ _____ ____  / __ \/ __ )
  / / / / ___/ __ `/ __ `/ _ \/ / / / __  |
 / /_/ / /  / /_/ / /_/ /  __/ /_/ / /_/ /
/_____/_/   \__,_/\__, /\___/_____/_____/
                 /____/";

pub const WELCOME: &str = "Welcome to DragoDB! Type 'help' for a list of commands.";

pub const PROMPT: &str = "DragoDB> ";

pub const FAREWELL: &str =
    "Farewell, brave adventurer! May your data always be safe and your queries swift.";

const DRAGONS: [&str; 3] = [
    r"
      /\___/\
     (  o o  )
     /   V   \
    /(  \^/  )\
   /  \     /  \
  /    )___( __ \
 /    (     )    \
/    (  \  /  )   \
(     )  \/  (     )
 \    (    )    /
  \   /    \   /
   \ /      \ /
    V        V",
    r"
        _____
    .-'`     '.
 __/  __       \
/  \ /  \       |
|  | \__/ __   _/
|  |    .'  '. |
 \  \  /  __  \/
  \  \/  /  \  \
   \    /    \  \
    \__/      \__\",
    r"
      <>=======()
    (/\___   /|\\          ()==========<>_
          \_/ | \\        //|\   ______/ \)
            \_|  \\      // | \_/
              \|\/|\_   //  /\/
               (oo)\ \_//  /
              //_/\_\/ /  |
             @@/  |=\  \  |
                  \_=\_ \ |
                    \==\ \|\_
                 __(\===\(  )\
                (((~) __(_/   |
                     (((~) \  /
                     ______/ /
                     '------'",
];

static NEXT_DRAGON: AtomicUsize = AtomicUsize::new(0);

pub fn dragon(n: usize) -> &'static str {
    DRAGONS[n % DRAGONS.len()]
}

/// Hands out the dragons in turn.
pub fn next_dragon() -> &'static str {
    dragon(NEXT_DRAGON.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dragons_rotate() {
        assert_eq!(dragon(0), DRAGONS[0]);
        assert_eq!(dragon(1), DRAGONS[1]);
        assert_eq!(dragon(DRAGONS.len() + 2), DRAGONS[2]);
        assert!(DRAGONS.contains(&next_dragon()));
    }
}
