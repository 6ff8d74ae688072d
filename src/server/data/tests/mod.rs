mod card;
mod score_up;

use i7card_test_utils::prelude::*;
