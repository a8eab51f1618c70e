//! Bundled catalog served when a collaborator is unreachable and offline
//! fallback is enabled.

use chrono::NaiveDate;

use crate::models::review::{Rating, Review};
use crate::models::room::{Amenity, Room};

use Amenity::*;

struct SampleRoom {
    id: u64,
    name: &'static str,
    description: &'static str,
    long_description: &'static str,
    price: i64,
    images: &'static [&'static str],
    rating: f32,
    amenities: &'static [Amenity],
    location: &'static str,
    max_guests: u32,
    bed_type: &'static str,
    room_size: &'static str,
}

const ROOMS: [SampleRoom; 6] = [
    SampleRoom {
        id: 1,
        name: "Phòng Deluxe",
        description: "Phòng sang trọng với view thành phố",
        long_description: "Phòng Deluxe của chúng tôi mang đến không gian sang trọng và thoải mái với diện tích 35m². Phòng được trang bị đầy đủ tiện nghi hiện đại, bao gồm TV màn hình phẳng, minibar, két an toàn và Wi-Fi miễn phí.",
        price: 1_200_000,
        images: &[
            "/penthouse-suite-vista.png",
            "/opulent-bathroom-retreat.png",
            "/luxurious-white-bed.png",
            "/executive-suite-workspace.png",
        ],
        rating: 4.8,
        amenities: &[Wifi, Breakfast, Tv, Bathtub, Aircon, Minibar, Safe],
        location: "Hà Nội",
        max_guests: 2,
        bed_type: "1 giường King size",
        room_size: "35m²",
    },
    SampleRoom {
        id: 2,
        name: "Phòng Superior",
        description: "Phòng rộng rãi với ban công",
        long_description: "Phòng Superior của chúng tôi mang đến không gian rộng rãi và thoải mái với diện tích 30m². Điểm nổi bật của phòng là ban công riêng, nơi bạn có thể thư giãn và ngắm nhìn khung cảnh tuyệt đẹp.",
        price: 950_000,
        images: &[
            "/mountain-view-balcony.png",
            "/modern-hotel-shower.png",
            "/crisp-hotel-bed.png",
        ],
        rating: 4.6,
        amenities: &[Wifi, Tv, Aircon, Minibar, Balcony],
        location: "Đà Nẵng",
        max_guests: 2,
        bed_type: "1 giường Queen size",
        room_size: "30m²",
    },
    SampleRoom {
        id: 3,
        name: "Phòng Suite",
        description: "Suite cao cấp với phòng khách riêng biệt",
        long_description: "Suite cao cấp rộng 60m² với phòng khách riêng biệt, bồn tắm và quyền sử dụng phòng tập gym.",
        price: 2_500_000,
        images: &["/grand-suite-living.png"],
        rating: 4.9,
        amenities: &[Wifi, Breakfast, Tv, Bathtub, Gym],
        location: "Hồ Chí Minh",
        max_guests: 3,
        bed_type: "1 giường King size",
        room_size: "60m²",
    },
    SampleRoom {
        id: 4,
        name: "Phòng Standard",
        description: "Phòng tiêu chuẩn thoải mái",
        long_description: "Phòng tiêu chuẩn 22m² với đầy đủ tiện nghi cơ bản cho kỳ nghỉ ngắn ngày.",
        price: 750_000,
        images: &["/comfortable-hotel-stay.png"],
        rating: 4.5,
        amenities: &[Wifi, Tv, Aircon],
        location: "Nha Trang",
        max_guests: 2,
        bed_type: "2 giường đơn",
        room_size: "22m²",
    },
    SampleRoom {
        id: 5,
        name: "Phòng Family",
        description: "Phòng gia đình rộng rãi với 2 giường đôi",
        long_description: "Phòng gia đình 45m² với 2 giường đôi, bữa sáng và chỗ đỗ xe miễn phí.",
        price: 1_800_000,
        images: &["/spacious-family-room.png"],
        rating: 4.7,
        amenities: &[Wifi, Breakfast, Tv, Bathtub, Parking],
        location: "Đà Lạt",
        max_guests: 4,
        bed_type: "2 giường đôi",
        room_size: "45m²",
    },
    SampleRoom {
        id: 6,
        name: "Phòng Executive",
        description: "Phòng hạng sang với dịch vụ VIP",
        long_description: "Phòng Executive 50m² với dịch vụ VIP, phòng tập gym và bãi đỗ xe riêng.",
        price: 3_200_000,
        images: &["/executive-suite-vip.png"],
        rating: 4.9,
        amenities: &[Wifi, Breakfast, Tv, Bathtub, Gym, Parking],
        location: "Hà Nội",
        max_guests: 2,
        bed_type: "1 giường King size",
        room_size: "50m²",
    },
];

impl From<&SampleRoom> for Room {
    fn from(sample: &SampleRoom) -> Self {
        Room {
            id: sample.id,
            name: sample.name.to_string(),
            description: sample.description.to_string(),
            long_description: sample.long_description.to_string(),
            price: sample.price,
            images: sample.images.iter().map(|s| s.to_string()).collect(),
            rating: sample.rating,
            amenities: sample.amenities.to_vec(),
            location: sample.location.to_string(),
            max_guests: sample.max_guests,
            bed_type: sample.bed_type.to_string(),
            room_size: sample.room_size.to_string(),
        }
    }
}

pub fn rooms() -> Vec<Room> {
    ROOMS.iter().map(Room::from).collect()
}

pub fn room(id: u64) -> Option<Room> {
    ROOMS.iter().find(|r| r.id == id).map(Room::from)
}

// (id, room, name, avatar, rating, (y, m, d), comment)
type SampleReview = (u64, u64, &'static str, &'static str, u8, (i32, u32, u32), &'static str);

const REVIEWS: [SampleReview; 3] = [
    (
        1,
        1,
        "Nguyễn Văn A",
        "/confident-leader.png",
        5,
        (2023, 10, 15),
        "Phòng rất sạch sẽ và thoải mái. Nhân viên thân thiện và nhiệt tình. Vị trí thuận tiện để đi tham quan các điểm du lịch. Tôi sẽ quay lại lần sau!",
    ),
    (
        2,
        1,
        "Trần Thị B",
        "/confident-asian-professional.png",
        4,
        (2023, 9, 22),
        "Phòng đẹp và thoáng mát. Tuy nhiên, hơi ồn vào buổi sáng do gần đường lớn. Nhưng nhìn chung là một trải nghiệm tốt.",
    ),
    (
        3,
        2,
        "Lê Văn C",
        "/thoughtful-young-man.png",
        5,
        (2023, 11, 5),
        "Phòng rộng rãi và thoải mái. View từ ban công rất đẹp, nhìn ra biển. Sẽ giới thiệu cho bạn bè!",
    ),
];

pub fn reviews_for(room_id: u64) -> Vec<Review> {
    REVIEWS
        .iter()
        .filter(|review| review.1 == room_id)
        .filter_map(|&(id, room_id, name, avatar, rating, (y, m, d), comment)| {
            Some(Review {
                id: id.to_string(),
                room_id,
                name: name.to_string(),
                avatar: Some(avatar.to_string()),
                rating: Rating::new(rating)?,
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                comment: comment.to_string(),
            })
        })
        .collect()
}
