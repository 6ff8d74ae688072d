
use i7card_test_utils::prelude::*;
