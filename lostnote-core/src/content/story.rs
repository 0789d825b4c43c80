//! The Little Lost Note story, page by page

use crate::types::{ImagePosition, PageLayout, PageType, StoryImage, StoryPage, Storybook};

pub(super) fn build() -> Storybook {
    use ImagePosition::*;

    Storybook::new(vec![
        // Cover
        StoryPage::new(1, PageType::Title, PageLayout::MultiImage).with_images(vec![
            StoryImage::new("/assets/logo.png", "Little Lost Note title logo").at(Top),
            StoryImage::new("/assets/little-lost-note-cover.png", "A little musical note").at(Center),
        ]),
        // About
        StoryPage::new(2, PageType::Story, PageLayout::TextOnly).with_content([
            "This book was written in the Fall of 1957 as a final paper for a child development class. We did not want to take the book apart. The following pages are scans of the pages of the book. We hope you enjoy this introduction to the orchestra.",
            "Suzy",
        ]),
        // Attribution
        StoryPage::new(3, PageType::Dedication, PageLayout::MultiImage)
            .with_content([
                "To Mother and Dad",
                "",
                "Thanks for all tender teaching and loving,",
                "And for lots of TLC.",
                "Thanks for faith and understanding;",
                "For letting me be me.",
            ])
            .with_images(vec![
                StoryImage::new("/assets/suzy.jpg", "Suzy").at(Bottom),
                StoryImage::new(
                    "/assets/attribution-1.png",
                    "A girl waving, with several birds, dogs, cats, and chickens around her",
                )
                .at(Bottom),
            ]),
        // Page 1
        StoryPage::new(4, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                "There once was a Little Lost Note. He was lost and didn't know where he lived in the music. He couldn't find his Mommy, or his Daddy, or any of his brothers or sisters.",
                "So Little Lost Note sat down on top of the staff and cried.",
            ])
            .with_image("/assets/1-1.png", "Little Lost Note sitting on staff crying"),
        // Page 2
        StoryPage::new(5, PageType::Story, PageLayout::MultiImage)
            .with_content([
                r#"The next thing he knew, he heard, "Tap! Tap! Tap!" He looked up and there was a stick tapping on the staff. "Who are you?" asked Little Lost Note."#,
                r#""I am Mr. Baton," said the stick. "The man needs me to conduct the orchestra and tell each instrument when it is his turn to play. Why are you crying?""#,
                r#""I am lost," said Little Lost Note. "I can't even remember my name. Why I don't even remember whether I live on Treble Cleff Street or Bass Cleff Street. I can't find my place in the music.""#,
                r#""We won't be able to play without you. But don't cry. I'll help you find your place in the music," said Mr. Baton."#,
            ])
            .with_images(vec![
                StoryImage::new(
                    "/assets/2-1.png",
                    "Little Lost Note sitting on staff crying, Mr. Baton tapping staff with baton",
                )
                .at(Left),
                StoryImage::new("/assets/2-2.png", "Mr. Baton conducting orchestra").at(Right),
            ]),
        // Page 3
        StoryPage::new(6, PageType::Story, PageLayout::MultiImage)
            .with_content([
                r#""We will go visit some of the instruments. One of them must know where you live. One of them must play your part in the music.""#,
                "So off they went to visit the instruments of the symphony orchestra. First they visited the String family. They were busy tuning up for the concert, but they stopped when they saw Mr. Baton and Little Lost Note.",
                r#""I have here a Little Lost Note and we must find where he belongs in the music. Do any of you know where he lives?" asked Mr. Baton."#,
            ])
            .with_images(vec![
                StoryImage::new(
                    "/assets/3-1.png",
                    "Mr. Baton and Little Lost Note standing in front of string instruments mailbox",
                )
                .at(Left),
                StoryImage::new("/assets/3-2.png", "bass, cello, violins and violas").at(Bottom),
            ]),
        // Page 4
        StoryPage::new(7, PageType::Story, PageLayout::MultiImage)
            .with_content([
                r#""Do you live way down here?" song the deep, deep voice of the bass fiddle, who was the biggest and the Daddy of all the strings."#,
                r#""No, I don't believe so," wept Little Lost Note."#,
                r#""I don't think I know you," came the beautiful, low song of the cello, who was the Mommy of the Strings."#,
                r#""No, I don't think so," said Little Lost Note. "Your music is very beautiful, but I do not live here.""#,
                "And the String children, the violins and violas, played for him, but he just could not remember where he belonged in the music.",
            ])
            .with_images(vec![
                StoryImage::new("/assets/4-1.png", "bass fiddle").at(TopLeft),
                StoryImage::new("/assets/4-2.png", "cello").at(Center),
                StoryImage::new("/assets/4-3.png", "violins and violas").at(BottomRight),
            ]),
        // Page 5: the percussions
        StoryPage::new(8, PageType::Story, PageLayout::FullImage)
            .with_image("/assets/5-1.png", "drums, triangle, cymbals, xylophone"),
        // Page 6
        StoryPage::new(9, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                r#"Next, Mr. Baton took him to visit the Percussion family. "They make their music when someone hits them," explained Mr. Baton. "They are very important sound effects for the music. There are drums, triangles, cymbols, and xylophones.""#,
                "Just then Mr. Baton opened the door to the home of the Percussions, but everyone was practicing at once and the noise was so frightening that Little Lost Note hurried and closed the door. He was sure that he did not live among that loud bang! bang! bang!",
            ])
            .with_image(
                "/assets/6-1.png",
                "Lost Note and Mr. Baton covering their ears in front of door at the Percussion house",
            ),
        // Page 7
        StoryPage::new(10, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                "So Mr. Baton and Little Lost Note continued on their way to visit the Woodwind family. These instruments play when someone blows on them and they have many keys to push to play different notes.",
                "They met Freddie Flute and PeeWee Piccalo, playing in the front yard. Their voices were high and shrill, like birds singing. Little Lost Note listened and he liked their songs, but he knew he didn't live with them.",
            ])
            .with_image(
                "/assets/7-1.png",
                "Freddie Flute and PeeWee Piccalo playing in front yard",
            ),
        // Page 8
        StoryPage::new(11, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                "The other Woodwinds came outside to meet their guests.",
                r#""I am lost," said Little Lost Note. "I don't remember my name or my address. Can you help me?""#,
                r#"Mr. Oboe song every note he knew. He song up the scale and down. His voice was strange and had a far away and exciting sound. It reminded Little Lost Note of having an adventure in some far-off land. Little Lost Note liked Mr. Oboe's song, but when Mr. Oboe finished his song, Little Lost Note hung his head and wept. "No I don't live here.""#,
            ])
            .with_image(
                "/assets/8-1.png",
                "Mr. Oboe playing music for Little Lost Note and Mr. Baton",
            ),
        // Page 9
        StoryPage::new(12, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                r#"Then Mrs. Clarinet played for him, and then her husband, Mr. Bass Clarinet, and Uncle English Horn played for him. They all came out and played for him. They played up the scale and down, they played high and low. Little Lost Note liked their songs, but when they finished, Little Lost Note hung his head and wept, "No, I don't live here either.""#,
            ])
            .with_image(
                "/assets/9-1.png",
                "Mrs. Clarinet, Mr. Bass Clarinet, and Uncle English Horn playing for Little Lost Note and Mr. Baton",
            ),
        // Page 10
        StoryPage::new(13, PageType::Story, PageLayout::MultiImage)
            .with_content([
                "And Mr. Bassoon came out and played for Little Lost Note. His voice was deep and his song was slow. Little Lost Note liked this strange music, too. But Little Lost Note didn't live here.",
                "Little Lost Note was getting very worried. He wanted his Mommy and Daddy, and his brothers and sisters.",
            ])
            .with_images(vec![
                StoryImage::new("/assets/10-1.png", "Mr. Bassoon playing music").at(BottomLeft),
                StoryImage::new(
                    "/assets/10-2.png",
                    "Little Lost Note and Mr. Baton looking sad",
                )
                .at(BottomRight),
            ]),
        // Page 11
        StoryPage::new(14, PageType::Story, PageLayout::MultiImage)
            .with_content([
                "Mr. Baton took him next to visit the Brass family. He met Sargent trumpet, who was a real soldier. His voice was loud and sharp. There was Miss Terry Trombone. Her voice was sometimes very loud and sometimes very soft and sweet.",
            ])
            .with_images(vec![
                StoryImage::new(
                    "/assets/11-1.png",
                    "Sargent Trumpet, Little Lost Note, and Mr. Baton saluting",
                )
                .at(Top),
                StoryImage::new("/assets/11-2.png", "Miss Terry Trombone playing music").at(Bottom),
            ]),
        // Page 12
        StoryPage::new(15, PageType::Story, PageLayout::MultiImage)
            .with_content([
                "And he met Mimi, the French Horn, and Tommy Tuba. They all played for him, but Little Lost Note just could not remember where he lived.",
            ])
            .with_images(vec![
                StoryImage::new(
                    "/assets/12-1.png",
                    "Mimi the French Horn sitting on a pink pillow",
                )
                .at(TopLeft),
                StoryImage::new("/assets/12-2.png", "Tommy Tuba").at(Bottom),
            ]),
        // Page 13
        StoryPage::new(16, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                r#"Mr. Baton sat down. "I just do not known anywhere else to go," he said. "I have taken you to see all four families in my orchestra. We visited the String, the Percussions, the Woodwinds, and the Brass. We won't be able to perform the concert tonight without your part in our music.""#,
                r#""I guess I'll never remember where I live," said Little Lost Note. And he cried, and cried, and cried."#,
                r#"Mr. Baton said, "Don't cry," but he couldn't think of any place else to look. He sat down on top of the staff and he thought, and thought, and thought."#,
            ])
            .with_image(
                "/assets/13-1.png",
                "Mr. Baton and Little Lost Note sitting on staff looking sad",
            ),
        // Page 14
        StoryPage::new(17, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                r#"Then they heard the String family. They were running down the street. "We know who you could ask," they cried. "You forgot our cousin, Miss Harp.""#,
                r#""Lets go find her," shouted Mr. Baton, and he jump up and ran for Miss Harp's house, pulling Little Lost Note after him."#,
            ])
            .with_image("/assets/14-1.png", "String family running down the street"),
        // Page 15
        StoryPage::new(18, PageType::Story, PageLayout::ImageBottom)
            .with_content([
                "When they got close to Miss Harp's house they stopped. There was Miss Harp sitting on the front porch. There was beautiful music coming from the house.",
                r#""I'm home!" shouted Little Lost Note. "This is where I live! I'm home! I'm home! Miss Harp plays my note in the music! Now we can play the music! Now we can have the concert!""#,
            ])
            .with_image(
                "/assets/15-1.png",
                "Miss Harp sitting on front porch playing music, Little Lost Note and Mr. Baton standing in front of house",
            ),
        // Page 16: sheet music 1
        StoryPage::new(19, PageType::Story, PageLayout::FullImage).with_image(
            "/assets/sheet-music-1.png",
            "Sheet music page 1 - Little Lost Note song",
        ),
        // Page 17: sheet music 2
        StoryPage::new(20, PageType::Story, PageLayout::FullImage).with_image(
            "/assets/sheet-music-2.png",
            "Sheet music page 2 - Little Lost Note song",
        ),
        // Page 18: end slide
        StoryPage::new(21, PageType::End, PageLayout::FullImage)
            .with_image("/assets/20-1.png", "Little Lost Note character"),
    ])
}
